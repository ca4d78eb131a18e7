use ice_client::utils::config::get_env_or_none;
use std::env;

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("ICE_TEST_VAR_OPTION", " https://ice.example.org ");
        let result: Option<String> = get_env_or_none("ICE_TEST_VAR_OPTION");
        assert_eq!(result.as_deref(), Some("https://ice.example.org"));
        env::remove_var("ICE_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_or_none_with_blank_var() {
    unsafe {
        env::set_var("ICE_TEST_VAR_BLANK", "   ");
        let result: Option<String> = get_env_or_none("ICE_TEST_VAR_BLANK");
        assert_eq!(result, None);
        env::remove_var("ICE_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_none_with_missing_var() {
    unsafe {
        env::remove_var("ICE_TEST_VAR_NONE");
        let result: Option<u64> = get_env_or_none("ICE_TEST_VAR_NONE");
        assert_eq!(result, None);
    }
}
