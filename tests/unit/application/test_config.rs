use ice_client::application::config::{ConfigKeys, Credentials, IceConfig};
use ice_client::error::AppError;
use std::collections::HashMap;
use std::path::PathBuf;

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn config_error(result: Result<IceConfig, AppError>) -> String {
    match result {
        Err(AppError::Config(msg)) => msg,
        other => panic!("Expected Config error, got {other:?}"),
    }
}

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ice-client-{}-{name}", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_with_token() {
    let config = IceConfig::with_token("https://ice.example.org/ ", "tok", Some("icebot"));
    assert_eq!(config.root, "https://ice.example.org");
    assert!(!config.requires_login());
    assert_eq!(
        config.credentials,
        Credentials::ApiToken {
            token: "tok".to_string(),
            client: Some("icebot".to_string())
        }
    );
}

#[test]
fn test_with_password() {
    let config = IceConfig::with_password("https://ice.example.org", "john@doe.org", "pw");
    assert!(config.requires_login());
}

#[test]
fn test_from_map_token() {
    let config = IceConfig::from_map(&map(&[
        ("root", "https://ice.example.org/"),
        ("token", "tok"),
    ]))
    .unwrap();
    assert_eq!(config.root, "https://ice.example.org");
    assert_eq!(
        config.credentials,
        Credentials::ApiToken {
            token: "tok".to_string(),
            client: None
        }
    );
}

#[test]
fn test_from_map_password() {
    let config = IceConfig::from_map(&map(&[
        ("root", "https://ice.example.org"),
        ("email", "john@doe.org"),
        ("password", "pw"),
    ]))
    .unwrap();
    assert!(config.requires_login());
}

#[test]
fn test_from_map_missing_root() {
    let msg = config_error(IceConfig::from_map(&map(&[("token", "tok")])));
    assert!(msg.contains("root"));
}

#[test]
fn test_from_map_both_modes() {
    let msg = config_error(IceConfig::from_map(&map(&[
        ("root", "https://ice.example.org"),
        ("token", "tok"),
        ("email", "john@doe.org"),
        ("password", "pw"),
    ])));
    assert!(msg.contains("use only one"));
}

#[test]
fn test_from_map_no_credentials() {
    let msg = config_error(IceConfig::from_map(&map(&[(
        "root",
        "https://ice.example.org",
    )])));
    assert!(msg.starts_with("no credentials"));
}

#[test]
fn test_from_map_email_without_password() {
    let msg = config_error(IceConfig::from_map(&map(&[
        ("root", "https://ice.example.org"),
        ("email", "john@doe.org"),
    ])));
    assert!(msg.contains("must be set together"));
}

#[test]
fn test_from_map_client_with_password() {
    let msg = config_error(IceConfig::from_map(&map(&[
        ("root", "https://ice.example.org"),
        ("client", "icebot"),
        ("email", "john@doe.org"),
        ("password", "pw"),
    ])));
    assert!(msg.contains("`client`"));
}

#[test]
fn test_blank_values_are_missing() {
    let msg = config_error(IceConfig::from_map(&map(&[
        ("root", "https://ice.example.org"),
        ("token", "  "),
    ])));
    assert!(msg.starts_with("no credentials"));
}

#[test]
fn test_serialization_uses_flat_keys() {
    let config = IceConfig::with_token("https://ice.example.org", "tok", None);
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"root": "https://ice.example.org", "token": "tok"})
    );

    let keys: ConfigKeys = config.clone().into();
    assert_eq!(keys.token.as_deref(), Some("tok"));
    assert_eq!(IceConfig::try_from(keys).unwrap(), config);
}

#[test]
fn test_debug_hides_secrets() {
    let token = format!("{:?}", IceConfig::with_token("https://ice.example.org", "s3cr3t", None));
    assert!(!token.contains("s3cr3t"));

    let password = format!(
        "{:?}",
        IceConfig::with_password("https://ice.example.org", "john@doe.org", "hunter2")
    );
    assert!(!password.contains("hunter2"));
    assert!(password.contains("john@doe.org"));
}

#[test]
fn test_deserialization_validates_keys() {
    let config: IceConfig = serde_json::from_value(serde_json::json!({
        "root": "https://ice.example.org/",
        "email": "john@doe.org",
        "password": "pw"
    }))
    .unwrap();
    assert_eq!(config.root, "https://ice.example.org");

    let result = serde_json::from_value::<IceConfig>(serde_json::json!({
        "root": "https://ice.example.org",
        "token": "tok",
        "password": "pw"
    }));
    let err = result.unwrap_err().to_string();
    assert!(err.contains("use only one"));
}

#[test]
fn test_from_env() {
    unsafe {
        std::env::set_var("ICE_ROOT", "https://ice.example.org/");
        std::env::set_var("ICE_TOKEN", "env-token");
        std::env::set_var("ICE_TOKEN_CLIENT", "icebot");
        std::env::remove_var("ICE_EMAIL");
        std::env::remove_var("ICE_PASSWORD");
    }
    let config = IceConfig::from_env().unwrap();
    unsafe {
        std::env::remove_var("ICE_ROOT");
        std::env::remove_var("ICE_TOKEN");
        std::env::remove_var("ICE_TOKEN_CLIENT");
    }

    assert_eq!(
        config,
        IceConfig::with_token("https://ice.example.org", "env-token", Some("icebot"))
    );
}

#[test]
fn test_from_toml_token_file() {
    let path = temp_file(
        "token.toml",
        "root = \"https://ice.example.org/\"\ntoken = \"tok\"\nclient = \"icebot\"\n",
    );
    let config = IceConfig::from_file(&path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        config.unwrap(),
        IceConfig::with_token("https://ice.example.org", "tok", Some("icebot"))
    );
}

#[test]
fn test_from_json_password_file() {
    let path = temp_file(
        "auth.json",
        r#"{"root": "https://ice.example.org", "email": "john@doe.org", "password": "pw"}"#,
    );
    let config = IceConfig::from_file(&path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        config.unwrap(),
        IceConfig::with_password("https://ice.example.org", "john@doe.org", "pw")
    );
}

#[test]
fn test_from_file_rejects_mixed_keys() {
    let path = temp_file(
        "mixed.toml",
        "root = \"https://ice.example.org\"\ntoken = \"tok\"\nemail = \"john@doe.org\"\npassword = \"pw\"\n",
    );
    let result = IceConfig::from_file(&path);
    std::fs::remove_file(&path).unwrap();

    let msg = config_error(result);
    assert!(msg.contains("use only one"));
}

#[test]
fn test_from_json_file_rejects_missing_root() {
    let path = temp_file("noroot.json", r#"{"token": "tok"}"#);
    let result = IceConfig::from_file(&path);
    std::fs::remove_file(&path).unwrap();

    match result {
        Err(AppError::Json(e)) => assert!(e.to_string().contains("missing `root`")),
        other => panic!("Expected Json error, got {other:?}"),
    }
}

#[test]
fn test_from_file_missing() {
    let result = IceConfig::from_file("/definitely/not/here/ice.toml");
    assert!(matches!(result, Err(AppError::Io(_))));
}
