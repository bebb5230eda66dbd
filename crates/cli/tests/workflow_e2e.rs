// Path: crates/cli/tests/workflow_e2e.rs

use letters_cli::{
    assemble, explain, identifier_for_file, load_config, load_record, sign_with_seed,
    verify_with_key, write_default_config, Settings,
};
use letters_types::app::{
    data_to_sign_by_worker, public_data_to_sign_by_referee, AccountId, GenesisHash,
    SchemaVersion, SignatureBytes,
};
use letters_types::codec::OverflowPolicy;
use letters_types::config::LettersConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn referee_json() -> String {
    format!(
        r#"{{
            "kind": "public_referee",
            "letter_id": 1,
            "block_number": 1,
            "referee": "0x{}",
            "worker": "0x{}",
            "amount": "1000000000000"
        }}"#,
        "11".repeat(32),
        "22".repeat(32)
    )
}

fn config_toml() -> String {
    format!("genesis_hash = \"0x{}\"\n", "aa".repeat(32))
}

#[test]
fn test_payload_matches_library_builder() {
    let dir = TempDir::new().unwrap();
    let record_path = write(&dir, "letter.json", &referee_json());
    let config_path = write(&dir, "letters.toml", &config_toml());

    let config = load_config(Some(&config_path)).unwrap();
    let settings = Settings::resolve(config, None, None);
    let record = load_record(&record_path).unwrap();
    let payload = assemble(&record, &settings).unwrap();

    let expected = public_data_to_sign_by_referee(
        &GenesisHash::new([0xaa; 32]),
        1,
        1u64,
        &AccountId::new([0x11; 32]),
        &AccountId::new([0x22; 32]),
        1_000_000_000_000u128,
    )
    .unwrap();
    assert_eq!(payload.bytes, expected);

    let rendered = explain(&payload);
    let names: Vec<&str> = rendered
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(
        names,
        vec!["genesis", "letter_id", "block_number", "referee", "worker", "amount"]
    );
    assert!(rendered.contains("000000e8d4a51000"));
}

#[test]
fn test_missing_genesis_is_reported() {
    let dir = TempDir::new().unwrap();
    let record_path = write(&dir, "letter.json", &referee_json());

    let record = load_record(&record_path).unwrap();
    let err = assemble(&record, &Settings::default()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("public_referee"), "{message}");
    assert!(message.contains("requires field 'genesis'"), "{message}");
}

#[test]
fn test_sign_then_verify_round_trip() {
    let dir = TempDir::new().unwrap();
    let record_path = write(&dir, "letter.json", &referee_json());
    let config_path = write(&dir, "letters.toml", &config_toml());

    let settings = Settings::resolve(load_config(Some(&config_path)).unwrap(), None, None);
    let record = load_record(&record_path).unwrap();
    let report = sign_with_seed(&record, &settings, SEED).unwrap();

    assert_eq!(
        report.public_key,
        "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
    );
    assert_eq!(report.account_id, format!("0x{}", report.public_key));
    assert_eq!(report.payload.len(), 124 * 2);
    assert_eq!(report.signature.len(), 64 * 2);

    verify_with_key(&record, &settings, &report.public_key, &report.signature).unwrap();

    // The same signature does not cover the record under another schema.
    let v1 = Settings {
        schema: SchemaVersion::V1,
        ..settings.clone()
    };
    assert!(verify_with_key(&record, &v1, &report.public_key, &report.signature).is_err());
}

#[test]
fn test_worker_penalty_with_legacy_schema() {
    let dir = TempDir::new().unwrap();
    let json = format!(
        r#"{{
            "kind": "worker_penalty",
            "letter_id": 7,
            "block_number": 100,
            "block_allowed": 200,
            "referee": "0x{r}",
            "worker": "0x{w}",
            "amount": 500,
            "referee_signature": "0x{s}",
            "employer": "0x{e}"
        }}"#,
        r = "11".repeat(32),
        w = "22".repeat(32),
        s = "cd".repeat(64),
        e = "33".repeat(32)
    );
    let record_path = write(&dir, "penalty.json", &json);
    let record = load_record(&record_path).unwrap();

    let legacy = Settings::resolve(LettersConfig::default(), Some(SchemaVersion::V2), None);
    assert_eq!(assemble(&record, &legacy).unwrap().bytes.len(), 196);
    assert!(assemble(&record, &Settings::default()).is_err());

    // Without the allowance the record assembles under the current schema and
    // matches the library builder.
    let json = json.replace("\"block_allowed\": 200,", "");
    let record_path = write(&dir, "penalty_v3.json", &json);
    let record = load_record(&record_path).unwrap();
    let expected = data_to_sign_by_worker(
        7,
        100u64,
        &AccountId::new([0x11; 32]),
        &AccountId::new([0x22; 32]),
        500u64,
        &SignatureBytes::new([0xcd; 64]),
        &AccountId::new([0x33; 32]),
    )
    .unwrap();
    assert_eq!(
        assemble(&record, &Settings::default()).unwrap().bytes,
        expected
    );
}

#[test]
fn test_passthrough_override() {
    let dir = TempDir::new().unwrap();
    let json = referee_json().replace("\"letter_id\": 1", "\"letter_id\": 4294967295");
    let record = load_record(&write(&dir, "letter.json", &json)).unwrap();
    let config = LettersConfig {
        genesis_hash: Some(GenesisHash::new([0xaa; 32])),
        ..LettersConfig::default()
    };
    let strict = Settings::resolve(config.clone(), None, None);
    assert_eq!(assemble(&record, &strict).unwrap().bytes.len(), 124);

    let big = referee_json().replace("\"block_number\": 1", "\"block_number\": \"18446744073709551616\"");
    let record = load_record(&write(&dir, "big.json", &big)).unwrap();
    assert!(assemble(&record, &strict).is_err());
    let loose = Settings::resolve(config, None, Some(OverflowPolicy::Passthrough));
    assert_eq!(assemble(&record, &loose).unwrap().bytes.len(), 125);
}

#[test]
fn test_default_config_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("letters.toml");
    write_default_config(&path).unwrap();
    assert_eq!(load_config(Some(&path)).unwrap(), LettersConfig::default());
    assert_eq!(load_config(None).unwrap(), LettersConfig::default());
}

#[tokio::test]
async fn test_identifier_for_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "letter.txt", "To whom it may concern");
    let cid = identifier_for_file(&path).await.unwrap();
    assert!(cid.starts_with("bafyrei"));
    let digest = letters_crypto::cid::extract_digest(&cid).unwrap();
    assert_eq!(
        digest,
        letters_crypto::algorithms::hash::sha256("To whom it may concern").unwrap()
    );
}
