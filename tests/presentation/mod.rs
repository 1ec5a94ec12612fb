mod bearer_auth_test;
