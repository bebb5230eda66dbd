// Path: crates/cli/src/workflow.rs

//! The steps each command performs, from reading input files to rendering hex.

use anyhow::{Context, Result};
use letters_api::crypto::{SerializableKey, SigningKeyPair};
use letters_api::storage::ContentStore;
use letters_crypto::sign::eddsa::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
use letters_crypto::sign::record::{sign_record, verify_record};
use letters_storage::MemoryContentStore;
use letters_types::app::{AssembledPayload, GenesisHash, SchemaVersion, SignableRecord};
use letters_types::codec::OverflowPolicy;
use letters_types::config::LettersConfig;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// The effective assembly settings after command-line overrides are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub schema: SchemaVersion,
    pub overflow_policy: OverflowPolicy,
    pub genesis_hash: Option<GenesisHash>,
}

impl Settings {
    /// Merges flags over a loaded config. Flags win.
    pub fn resolve(
        config: LettersConfig,
        schema: Option<SchemaVersion>,
        overflow_policy: Option<OverflowPolicy>,
    ) -> Self {
        Self {
            schema: schema.unwrap_or(config.schema),
            overflow_policy: overflow_policy.unwrap_or(config.overflow_policy),
            genesis_hash: config.genesis_hash,
        }
    }

    /// Returns a copy of `record` with the configured genesis applied, if the
    /// schema lays one out and the record does not already carry one.
    fn prepare(&self, record: &SignableRecord) -> SignableRecord {
        let mut record = record.clone();
        if self.schema.binds_genesis() {
            if let Some(genesis) = &self.genesis_hash {
                record.fill_genesis(genesis);
            }
        }
        record
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(LettersConfig::default(), None, None)
    }
}

/// Loads a TOML config, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<LettersConfig> {
    let Some(path) = path else {
        return Ok(LettersConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Writes the default config to `path` as TOML.
pub fn write_default_config(path: &Path) -> Result<()> {
    let rendered = toml::to_string_pretty(&LettersConfig::default())?;
    fs::write(path, rendered)
        .with_context(|| format!("Failed to write config file {}", path.display()))
}

/// Parses a record from its tagged JSON form.
pub fn parse_record(json: &str) -> Result<SignableRecord> {
    serde_json::from_str(json).context("Failed to parse record JSON")
}

/// Reads and parses a record file.
pub fn load_record(path: &Path) -> Result<SignableRecord> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file {}", path.display()))?;
    parse_record(&raw).with_context(|| format!("Invalid record in {}", path.display()))
}

/// Lays `record` out under the resolved settings.
pub fn assemble(record: &SignableRecord, settings: &Settings) -> Result<AssembledPayload> {
    let record = settings.prepare(record);
    record
        .assemble(settings.schema, settings.overflow_policy)
        .with_context(|| {
            format!(
                "Failed to assemble {} record under schema {}",
                record.kind(),
                settings.schema
            )
        })
}

/// Renders one line per field: name, byte range and the field's bytes in hex.
pub fn explain(payload: &AssembledPayload) -> String {
    payload
        .fields
        .iter()
        .map(|field| {
            let bytes = payload.bytes.get(field.range.clone()).unwrap_or_default();
            format!(
                "{:<18} {:>3}..{:<3} {}\n",
                field.name,
                field.range.start,
                field.range.end,
                hex::encode(bytes)
            )
        })
        .collect()
}

/// Everything the `sign` command prints, hex encoded.
#[derive(Debug, Clone, Serialize)]
pub struct SignatureReport {
    pub public_key: String,
    pub account_id: String,
    pub payload: String,
    pub signature: String,
}

/// Decodes hex with or without a `0x` prefix.
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(digits).with_context(|| format!("Invalid hex string {trimmed:?}"))
}

/// Signs the assembled payload of `record` with the Ed25519 key derived from a
/// 32-byte hex seed.
pub fn sign_with_seed(
    record: &SignableRecord,
    settings: &Settings,
    seed_hex: &str,
) -> Result<SignatureReport> {
    let seed = decode_hex(seed_hex).context("Invalid signing seed")?;
    let keypair = Ed25519KeyPair::from_seed(&seed).context("Invalid signing seed")?;
    let record = settings.prepare(record);
    let signed = sign_record(&keypair, &record, settings.schema, settings.overflow_policy)
        .with_context(|| format!("Failed to sign {} record", record.kind()))?;

    let public = keypair.public_key();
    log::info!(
        "signed {} record as {} under schema {}",
        record.kind(),
        public.account_id(),
        settings.schema
    );
    Ok(SignatureReport {
        public_key: hex::encode(public.to_bytes()),
        account_id: public.account_id().to_hex(),
        payload: hex::encode(&signed.payload),
        signature: hex::encode(signed.signature.to_bytes()),
    })
}

/// Checks a hex Ed25519 signature against the assembled payload of `record`.
pub fn verify_with_key(
    record: &SignableRecord,
    settings: &Settings,
    public_key_hex: &str,
    signature_hex: &str,
) -> Result<()> {
    let key = Ed25519PublicKey::from_bytes(&decode_hex(public_key_hex)?)
        .context("Invalid public key")?;
    let signature = Ed25519Signature::from_bytes(&decode_hex(signature_hex)?)
        .context("Invalid signature")?;
    let record = settings.prepare(record);
    verify_record(
        &key,
        &record,
        settings.schema,
        settings.overflow_policy,
        &signature,
    )
    .with_context(|| {
        format!(
            "Signature does not match the {} record under schema {}",
            record.kind(),
            settings.schema
        )
    })
}

/// Computes the identifier a content store assigns to the file at `path`.
pub async fn identifier_for_file(path: &Path) -> Result<String> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let store = MemoryContentStore::new();
    let cid = store.put(&content).await?;
    Ok(cid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = LettersConfig {
            schema: SchemaVersion::V2,
            overflow_policy: OverflowPolicy::Passthrough,
            genesis_hash: Some(GenesisHash::new([1; 32])),
        };
        let settings = Settings::resolve(config.clone(), Some(SchemaVersion::V1), None);
        assert_eq!(settings.schema, SchemaVersion::V1);
        assert_eq!(settings.overflow_policy, OverflowPolicy::Passthrough);

        let settings = Settings::resolve(config, None, Some(OverflowPolicy::Reject));
        assert_eq!(settings.schema, SchemaVersion::V2);
        assert_eq!(settings.overflow_policy, OverflowPolicy::Reject);
    }

    #[test]
    fn test_decode_hex_accepts_prefix() {
        assert_eq!(decode_hex("0x0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex(" 0a0b\n").unwrap(), vec![0x0a, 0x0b]);
        assert!(decode_hex("0xzz").is_err());
    }

    #[test]
    fn test_genesis_is_not_applied_to_v1() {
        let record = parse_record(&format!(
            r#"{{"kind":"public_referee","letter_id":1,"block_number":1,
                "referee":"0x{r}","worker":"0x{w}","amount":5}}"#,
            r = "11".repeat(32),
            w = "22".repeat(32)
        ))
        .unwrap();
        let settings = Settings {
            schema: SchemaVersion::V1,
            overflow_policy: OverflowPolicy::Reject,
            genesis_hash: Some(GenesisHash::new([0xaa; 32])),
        };
        assert_eq!(assemble(&record, &settings).unwrap().bytes.len(), 92);
    }
}
