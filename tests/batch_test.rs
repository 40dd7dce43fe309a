use serp_parser::{parse_serp, parse_serps, Options, SerpPage};

const WEATHER: &str = include_str!("fixtures/weather.html");

#[test]
fn batch_matches_sequential_parsing() {
    let options = Options::default();
    let pages: Vec<SerpPage> = (0..8)
        .map(|i| SerpPage {
            serp_id: Some(format!("page-{i}")),
            html: WEATHER.to_string(),
        })
        .collect();

    let results = parse_serps(&pages, &options);
    assert_eq!(results.len(), pages.len());

    for (i, result) in results.into_iter().enumerate() {
        let records = result.expect("page parses");
        let expected = parse_serp(WEATHER, &options.with_serp_id(Some(format!("page-{i}"))))
            .expect("page parses");
        assert_eq!(records, expected);
    }
}

#[test]
fn batch_page_without_id_inherits_options_id() {
    let options = Options {
        serp_id: Some("shared".to_string()),
        ..Options::default()
    };
    let pages = vec![SerpPage {
        serp_id: None,
        html: WEATHER.to_string(),
    }];

    let records = parse_serps(&pages, &options).remove(0).expect("page parses");
    assert!(records.iter().all(|r| r.serp_id.as_deref() == Some("shared")));
}

#[test]
fn empty_batch() {
    assert!(parse_serps(&[], &Options::default()).is_empty());
}
