use sniff::format::render_report;
use sniff::{
    BatchEvent, ContentKind, Fingerprint, HexCase, ReportFormat, SniffConfig, run_batch,
    run_batch_with_events,
};

fn ingest_sample() -> Vec<Vec<u8>> {
    vec![
        b"\xEF\xBB\xBF{\"level\":\"info\",\"msg\":\"started\"}".to_vec(),
        b"<event><id>7</id></event>".to_vec(),
        b"GET /health 200".to_vec(),
        vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00],
        b"   \n".to_vec(),
        b"\xEF\xBB\xBF{\"level\":\"info\",\"msg\":\"started\"}".to_vec(),
    ]
}

#[test]
fn test_batch_end_to_end() -> anyhow::Result<()> {
    let owned = ingest_sample();
    let payloads: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();

    let config = SniffConfig::from_toml_str(
        r#"
        hex_case = "lower"
        report_format = "json"
        verbose = true
        "#,
    )?;
    let report = run_batch(&payloads, &config)?;

    let kinds: Vec<ContentKind> = report.records.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ContentKind::Json,
            ContentKind::XmlOrHtml,
            ContentKind::Text,
            ContentKind::Binary,
            ContentKind::Unknown,
            ContentKind::Json,
        ]
    );
    assert_eq!(report.records[5].duplicate_of, Some(0));
    assert_eq!(report.hex_case, HexCase::Lower);

    let rendered = render_report(&report, config.report_format)?;
    let value: serde_json::Value = serde_json::from_str(&rendered)?;
    let first = value["records"][0]["fingerprint"]
        .as_str()
        .unwrap_or_default()
        .parse::<Fingerprint>()?;
    assert_eq!(first, Fingerprint::of(payloads[0]));

    Ok(())
}

#[test]
fn test_events_follow_input_order() -> anyhow::Result<()> {
    let owned = ingest_sample();
    let payloads: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();
    let (tx, rx) = crossbeam_channel::unbounded();

    let config = SniffConfig {
        parallel_threshold: 1,
        ..Default::default()
    };
    run_batch_with_events(&payloads, &config, Some(tx))?;

    let classified: Vec<usize> = rx
        .iter()
        .filter_map(|e| match e {
            BatchEvent::Classified { index, .. } => Some(index),
            _ => None,
        })
        .collect();
    assert_eq!(classified, (0..payloads.len()).collect::<Vec<_>>());
    Ok(())
}

#[test]
fn test_report_serializes() -> anyhow::Result<()> {
    let owned = ingest_sample();
    let payloads: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();
    let report = run_batch(&payloads, &SniffConfig::default())?;

    let json = serde_json::to_string(&report)?;
    let back: sniff::BatchReport = serde_json::from_str(&json)?;
    assert_eq!(back, report);

    let plain = render_report(&report, ReportFormat::Plain)?;
    assert!(plain.contains("Duplicates: 1"));
    Ok(())
}
