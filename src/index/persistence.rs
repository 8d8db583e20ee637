use anyhow::{bail, Context, Result};
use log::{info, warn};
use polars::prelude::*;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::Path;
use std::time::Instant;

use super::sources::{ExtraIndices, QualitySettings};
use super::QualityIndex;
use crate::common::{format_elapsed, open_input};
use crate::venue::BadgeKind;

fn load_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let reader = open_input(path)?;
    serde_json::from_reader(reader).with_context(|| format!("Failed to parse JSON: {}", path))
}

/// Load ranking settings from a JSON file (`.gz` accepted)
pub fn load_settings(path: &str) -> Result<QualitySettings> {
    info!("Loading quality settings from: {}", path);
    load_json(path)
}

/// Load pre-built ranking indices from a JSON file (`.gz` accepted)
pub fn load_extra_indices(path: &str) -> Result<ExtraIndices> {
    info!("Loading extra indices from: {}", path);
    let start = Instant::now();
    let extra: ExtraIndices = load_json(path)?;
    info!("Loaded extra indices in {}", format_elapsed(start.elapsed()));
    Ok(extra)
}

/// Load a `name`/`value` rank table from Parquet. Numeric value columns are
/// read as strings; rows with a null on either side are skipped.
pub fn load_rank_map_from_parquet(path: &str) -> Result<BTreeMap<String, String>> {
    info!("Loading rank table from: {}", path);
    let start = Instant::now();

    let df = LazyFrame::scan_parquet(path, Default::default())
        .with_context(|| format!("Failed to scan parquet: {}", path))?
        .collect()
        .context("Failed to collect rank table dataframe")?;

    let names = df.column("name")?.str()?;
    let values = df.column("value")?.cast(&DataType::String)?;
    let values = values.str()?;

    let map: BTreeMap<String, String> = names
        .into_iter()
        .zip(values)
        .filter_map(|(name, value)| Some((name?.to_string(), value?.to_string())))
        .collect();

    info!("Loaded {} rows in {}", map.len(), format_elapsed(start.elapsed()));
    Ok(map)
}

/// Whether a table of `kind` can round-trip through a `name`/`value` Parquet file.
/// JCR rows carry several indicators and preprint badges have no table.
pub fn parquet_loadable(kind: BadgeKind) -> bool {
    !matches!(kind, BadgeKind::Jcr | BadgeKind::Preprint)
}

fn append_lines(text: &mut String, lines: impl Iterator<Item = String>) {
    for line in lines {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&line);
        text.push('\n');
    }
}

/// Merge a Parquet rank table into the source slot for `kind`.
///
/// Pre-built systems land in `extra`; systems entered as text (ABDC, CORE,
/// CCF, FT50, UTD24) are appended to the matching `settings` list. Later
/// tables for the same slot override earlier keys.
pub fn apply_parquet_table(
    settings: &mut QualitySettings,
    extra: &mut ExtraIndices,
    kind: BadgeKind,
    path: &str,
) -> Result<()> {
    if !parquet_loadable(kind) {
        bail!("Rank tables of kind '{}' cannot be loaded from parquet", kind);
    }
    let rows = load_rank_map_from_parquet(path)?;
    let as_values = |rows: BTreeMap<String, String>| -> BTreeMap<String, serde_json::Value> {
        rows.into_iter().map(|(k, v)| (k, serde_json::Value::String(v))).collect()
    };
    let rank_lines = |rows: BTreeMap<String, String>| rows.into_iter().map(|(k, v)| format!("{},{}", k, v));

    match kind {
        BadgeKind::Quartile => extra.quartiles_index.get_or_insert_with(BTreeMap::new).extend(rows),
        BadgeKind::Vhb => extra.vhb_index.get_or_insert_with(BTreeMap::new).extend(rows),
        BadgeKind::Abs => extra.abs_index.get_or_insert_with(BTreeMap::new).extend(as_values(rows)),
        BadgeKind::Norwegian => extra
            .norwegian_map
            .get_or_insert_with(BTreeMap::new)
            .extend(as_values(rows)),
        BadgeKind::ImpactFactor => extra
            .impact_index
            .get_or_insert_with(BTreeMap::new)
            .extend(as_values(rows)),
        BadgeKind::H5 => extra.h5_index.get_or_insert_with(BTreeMap::new).extend(as_values(rows)),
        BadgeKind::Era => extra
            .era_set
            .get_or_insert_with(Vec::new)
            .extend(rows.into_keys()),
        BadgeKind::Abdc => append_lines(&mut settings.abdc_ranks, rank_lines(rows)),
        BadgeKind::Core => append_lines(&mut settings.core_ranks, rank_lines(rows)),
        BadgeKind::Ccf => append_lines(&mut settings.ccf_ranks, rank_lines(rows)),
        BadgeKind::Ft50 => append_lines(&mut settings.ft50_list, rows.into_keys()),
        BadgeKind::Utd24 => append_lines(&mut settings.utd24_list, rows.into_keys()),
        other @ (BadgeKind::Jcr | BadgeKind::Preprint) => {
            bail!("Rank tables of kind '{}' cannot be loaded from parquet", other)
        }
    }
    Ok(())
}

/// Write `(name, value)` rows as a two-column Parquet file
pub fn save_rank_rows_to_parquet(rows: &[(String, String)], path: &Path) -> Result<()> {
    let names: Vec<&str> = rows.iter().map(|(n, _)| n.as_str()).collect();
    let values: Vec<&str> = rows.iter().map(|(_, v)| v.as_str()).collect();

    let mut df = DataFrame::new(vec![
        Column::new("name".into(), &names),
        Column::new("value".into(), &values),
    ])?;

    let file = File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    ParquetWriter::new(file)
        .with_compression(ParquetCompression::Zstd(None))
        .finish(&mut df)
        .with_context(|| format!("Failed to write parquet: {}", path.display()))?;
    Ok(())
}

/// Export every non-empty table that [`parquet_loadable`] accepts as
/// `<kind>.parquet` under `dir`. Returns the number of files written.
pub fn export_index_tables(index: &QualityIndex, dir: &str) -> Result<usize> {
    info!("Exporting quality index tables to: {}", dir);
    let start = Instant::now();
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {}", dir))?;

    let mut written = 0;
    for kind in BadgeKind::ALL.into_iter().filter(|k| parquet_loadable(*k)) {
        let rows = index.table_rows(kind);
        if rows.is_empty() {
            continue;
        }
        let path = Path::new(dir).join(format!("{}.parquet", kind.as_str()));
        if let Err(e) = save_rank_rows_to_parquet(&rows, &path) {
            warn!("Skipping {} table: {:#}", kind, e);
            continue;
        }
        written += 1;
    }

    info!("Exported {} tables in {}", written, format_elapsed(start.elapsed()));
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_plain_and_gz() {
        let dir = tempdir().unwrap();
        let json = r#"{"core_ranks": "ICIS,A", "qualityFt50List": "MIS Quarterly"}"#;

        let plain = dir.path().join("settings.json");
        fs::write(&plain, json).unwrap();
        let settings = load_settings(plain.to_str().unwrap()).unwrap();
        assert_eq!(settings.core_ranks, "ICIS,A");
        assert_eq!(settings.ft50_list, "MIS Quarterly");

        let gz = dir.path().join("settings.json.gz");
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(json.as_bytes()).unwrap();
        encoder.finish().unwrap();
        let settings = load_settings(gz.to_str().unwrap()).unwrap();
        assert_eq!(settings.core_ranks, "ICIS,A");
    }

    #[test]
    fn test_load_settings_errors_name_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_settings(path.to_str().unwrap()).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));

        assert!(load_extra_indices("/nonexistent/extra.json").is_err());
    }

    #[test]
    fn test_parquet_rank_table_roundtrip_into_extra() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quartiles.parquet");
        let rows = vec![
            ("mis quarterly".to_string(), "Q1".to_string()),
            ("journal of finance".to_string(), "Q2".to_string()),
        ];
        save_rank_rows_to_parquet(&rows, &path).unwrap();

        let map = load_rank_map_from_parquet(path.to_str().unwrap()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["mis quarterly"], "Q1");

        let mut settings = QualitySettings::default();
        let mut extra = ExtraIndices::default();
        let path = path.to_str().unwrap();
        apply_parquet_table(&mut settings, &mut extra, BadgeKind::Quartile, path).unwrap();
        apply_parquet_table(&mut settings, &mut extra, BadgeKind::Era, path).unwrap();
        assert_eq!(extra.quartiles_index.as_ref().unwrap()["journal of finance"], "Q2");
        assert_eq!(extra.era_set.as_ref().unwrap().len(), 2);
        assert!(apply_parquet_table(&mut settings, &mut extra, BadgeKind::Jcr, path).is_err());
    }

    #[test]
    fn test_export_index_tables() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("tables");
        let settings = QualitySettings {
            core_ranks: "ICIS,A".to_string(),
            ft50_list: "MIS Quarterly".to_string(),
            ..Default::default()
        };
        let index = crate::index::compile_quality_index(&settings, &ExtraIndices::default());

        let written = export_index_tables(&index, out.to_str().unwrap()).unwrap();
        assert_eq!(written, 2);
        assert!(out.join("core.parquet").exists());
        assert!(out.join("ft50.parquet").exists());
        assert!(!out.join("abdc.parquet").exists());
    }

    #[test]
    fn test_exported_tables_load_back() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("tables");
        let settings = QualitySettings {
            ft50_list: "MIS Quarterly".to_string(),
            utd24_list: "Information Systems Research".to_string(),
            abdc_ranks: "MIS Quarterly,A*".to_string(),
            core_ranks: "ICIS,A".to_string(),
            ccf_ranks: "ACM CCS,A".to_string(),
            ..Default::default()
        };
        let mut extra = ExtraIndices::default();
        extra.jcr_index = Some(BTreeMap::from([(
            "mis quarterly".to_string(),
            crate::index::JcrRecord {
                jif_q: Some("Q1".to_string()),
                ..Default::default()
            },
        )]));
        let index = crate::index::compile_quality_index(&settings, &extra);

        let written = export_index_tables(&index, out.to_str().unwrap()).unwrap();
        assert_eq!(written, 5);
        assert!(!out.join("jcr.parquet").exists());

        let mut reloaded_settings = QualitySettings::default();
        let mut reloaded_extra = ExtraIndices::default();
        for kind in BadgeKind::ALL {
            let path = out.join(format!("{}.parquet", kind.as_str()));
            if path.exists() {
                apply_parquet_table(&mut reloaded_settings, &mut reloaded_extra, kind, path.to_str().unwrap())
                    .unwrap();
            }
        }
        let reloaded = crate::index::compile_quality_index(&reloaded_settings, &reloaded_extra);
        for kind in BadgeKind::ALL.into_iter().filter(|k| parquet_loadable(*k)) {
            assert_eq!(reloaded.table_rows(kind), index.table_rows(kind), "{}", kind);
        }
    }
}
