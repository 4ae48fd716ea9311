/// Skip a test if live AWS settings are not configured.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("AWS_PROFILE").is_err() {
            eprintln!("SKIPPED: AWS_PROFILE not set");
            return;
        }
        if std::env::var("UPDATE_SECRETS_TEST_SECRET").is_err() {
            eprintln!("SKIPPED: UPDATE_SECRETS_TEST_SECRET not set (set to a scratch secret name)");
            return;
        }
    };
}
