use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert!(config.compression);
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_all_variables() {
    let config =
        Config::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1"), ("COMPRESSION", "off")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert!(!config.compression);
}

#[test]
fn rejects_bad_port() {
    assert_eq!(
        Config::from_lookup(lookup(&[("PORT", "http")])),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
    assert_eq!(Config::from_lookup(lookup(&[("PORT", "0")])), Err(ConfigError::InvalidPort("0".to_owned())));
    assert!(Config::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn rejects_bad_bind_addr() {
    assert_eq!(
        Config::from_lookup(lookup(&[("BIND_ADDR", "localhost")])),
        Err(ConfigError::InvalidBindAddr("localhost".to_owned()))
    );
}

#[test]
fn rejects_bad_bool() {
    assert_eq!(
        Config::from_lookup(lookup(&[("COMPRESSION", "maybe")])),
        Err(ConfigError::InvalidBool { key: "COMPRESSION", value: "maybe".to_owned() })
    );
}

#[test]
fn bool_accepts_common_spellings() {
    for (raw, expected) in [("1", true), ("TRUE", true), ("yes", true), ("0", false), (" No ", false)] {
        let config = Config::from_lookup(lookup(&[("COMPRESSION", raw)])).unwrap();
        assert_eq!(config.compression, expected, "{raw}");
    }
}

#[test]
fn leptos_error_names_its_source() {
    let err = ConfigError::Leptos("missing site-root".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing site-root");
}
