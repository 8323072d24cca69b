//! Skip helpers for tests needing real cloud credentials.

/// Skip a test if AWS credentials or the test secret are not configured.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("AWS_ACCESS_KEY_ID").is_err() && std::env::var("AWS_PROFILE").is_err() {
            eprintln!("SKIPPED: AWS_ACCESS_KEY_ID / AWS_PROFILE not set");
            return;
        }
        if std::env::var("APT_AUTH_TEST_SECRET_ARN").is_err() {
            eprintln!("SKIPPED: APT_AUTH_TEST_SECRET_ARN not set (set to a Secrets Manager ARN)");
            return;
        }
    };
}
