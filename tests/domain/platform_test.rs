use vidscript::domain::Platform;

#[test]
fn given_mixed_case_youtube_when_parsed_then_is_youtube() {
    assert_eq!(Platform::parse("YouTube"), Platform::YouTube);
    assert_eq!(Platform::parse("YOUTUBE"), Platform::YouTube);
    assert_eq!(Platform::parse("youtube"), Platform::YouTube);
}

#[test]
fn given_other_tag_when_parsed_then_keeps_tag_and_has_no_audio() {
    let platform = Platform::parse("tiktok");

    assert_eq!(platform, Platform::Other("tiktok".to_string()));
    assert!(!platform.supports_audio());
    assert_eq!(platform.to_string(), "tiktok");
}

#[test]
fn given_padded_youtube_when_parsed_then_is_not_recognized() {
    assert!(!Platform::parse(" youtube").supports_audio());
}
