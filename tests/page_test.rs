//! End-to-end parsing of a saved results page.

use std::collections::HashSet;

use serp_parser::{dom, parse_document, parse_serp, Options, Record, SerpInput, SerpParser};

const WEATHER: &str = include_str!("fixtures/weather.html");

fn parse(options: &Options) -> Vec<Record> {
    parse_serp(WEATHER, options).expect("page parses")
}

fn kinds_by_component(records: &[Record]) -> Vec<(usize, &str)> {
    let mut seen = Vec::new();
    for r in records {
        if seen.last().map(|(rank, _)| *rank) != Some(r.cmpt_rank) {
            seen.push((r.cmpt_rank, r.kind.as_str()));
        }
    }
    seen
}

#[test]
fn components_in_page_order() {
    let records = parse(&Options::default());

    assert_eq!(
        kinds_by_component(&records),
        vec![
            (0, "ad-top"),
            (1, "general"),
            (2, "view_more_news"),
            (3, "knowledge"),
            (4, "unknown"),
            (5, "general"),
            (6, "ad-bottom"),
            (7, "searches_related"),
        ]
    );
    assert_eq!(records.len(), 12);
}

#[test]
fn component_ranks_are_gapless() {
    let records = parse(&Options::default());
    let ranks: Vec<usize> = records.iter().map(|r| r.cmpt_rank).collect();

    let max = *ranks.iter().max().expect("records");
    let distinct: HashSet<usize> = ranks.iter().copied().collect();
    assert_eq!(distinct, (0..=max).collect());
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn sub_ranks_restart_per_component() {
    let records = parse(&Options::default());

    for rank in 0..=7 {
        let subs: Vec<usize> = records
            .iter()
            .filter(|r| r.cmpt_rank == rank)
            .map(|r| r.sub_rank)
            .collect();
        assert_eq!(subs, (0..subs.len()).collect::<Vec<_>>(), "component {rank}");
    }
}

#[test]
fn serp_rank_is_record_position() {
    let records = parse(&Options::default());
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.serp_rank, i);
    }
}

#[test]
fn page_fields_on_every_record() {
    let options = Options {
        serp_id: Some("weather-001".to_string()),
        ..Options::default()
    };
    let records = parse(&options);

    assert!(records.iter().all(|r| r.qry.as_deref() == Some("weather")));
    assert!(records.iter().all(|r| r.lang.as_deref() == Some("en")));
    assert!(records.iter().all(|r| r.serp_id.as_deref() == Some("weather-001")));
}

#[test]
fn placeholder_shells_are_dropped() {
    let records = parse(&Options::default());
    // Seven main-column blocks on the page, two of them empty shells
    let main: HashSet<usize> = records
        .iter()
        .filter(|r| !matches!(r.kind.as_str(), "ad-top" | "ad-bottom" | "searches_related"))
        .map(|r| r.cmpt_rank)
        .collect();
    assert_eq!(main.len(), 5);
    assert!(records.iter().all(|r| r.get("text") != Some("Twitter Results")));
}

#[test]
fn news_cards_with_missing_images() {
    let records = parse(&Options::default());
    let news: Vec<&Record> = records.iter().filter(|r| r.kind == "view_more_news").collect();

    assert_eq!(news.len(), 3);
    assert_eq!(news.iter().filter(|r| r.get("img_url").is_some()).count(), 2);
    assert_eq!(news[1].get("img_url"), None);
    assert_eq!(news[0].get("title"), Some("Storm heads east"));
    assert_eq!(news[0].get("cite"), Some("Example News"));
    assert_eq!(news[0].get("timestamp"), Some("2 hours ago"));
    assert_eq!(news[2].get("timestamp"), Some("1 day ago"));
    assert_eq!(news[2].get("url"), Some("https://news.example.com/snow"));
}

#[test]
fn redirect_links_are_unwrapped() {
    let records = parse(&Options::default());
    let climate = records
        .iter()
        .find(|r| r.get("title") == Some("Today's Climate"))
        .expect("second general result");
    assert_eq!(climate.get("url"), Some("https://climate.example.org/today"));
    assert_eq!(climate.get("text"), Some("Temperatures and humidity for your area."));
}

#[test]
fn faulty_component_degrades_to_error_record() {
    let records = parse(&Options::default());
    let failed: Vec<&Record> = records.iter().filter(|r| r.is_error()).collect();

    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].kind, "general");
    assert_eq!(failed[0].cmpt_rank, 5);
    assert!(failed[0].error.as_deref().unwrap_or_default().contains("a[href]"));

    // Neighbours on both sides still parsed
    assert!(records.iter().any(|r| r.cmpt_rank == 4));
    assert!(records.iter().any(|r| r.kind == "ad-bottom"));
}

#[test]
fn unparsed_and_unknown_components_yield_one_record() {
    let records = parse(&Options::default());
    for kind in ["knowledge", "unknown"] {
        let matching: Vec<&Record> = records.iter().filter(|r| r.kind == kind).collect();
        assert_eq!(matching.len(), 1, "{kind}");
        assert!(matching[0].fields.is_empty());
        assert!(!matching[0].is_error());
    }
}

#[test]
fn ads_can_be_excluded() {
    let options = Options {
        include_ads: false,
        ..Options::default()
    };
    let records = parse(&options);

    assert!(records.iter().all(|r| !r.kind.starts_with("ad-")));
    assert_eq!(records[0].cmpt_rank, 0);
    assert_eq!(records[0].kind, "general");
    assert_eq!(records.last().map(|r| r.cmpt_rank), Some(5));
}

#[test]
fn parsing_is_idempotent() {
    let doc = dom::parse(WEATHER);
    let options = Options::default();

    let first = parse_document(&doc, &options).expect("first pass");
    let second = parse_document(&doc, &options).expect("second pass");
    assert_eq!(first, second);
}

#[test]
fn tree_and_html_inputs_agree() {
    let doc = dom::parse(WEATHER);
    let options = Options::default().with_tree();
    let parser = SerpParser::new(&options);

    let from_tree = parser.parse_input(SerpInput::Tree(&doc)).expect("tree input");
    let from_html = parser.parse_input(SerpInput::Html(WEATHER)).expect("html input");
    assert_eq!(from_tree, from_html);
}

#[test]
fn empty_page_yields_no_records() {
    let records = parse_serp("<html><head><title>weather - Google Search</title></head></html>", &Options::default())
        .expect("empty page parses");
    assert!(records.is_empty());
}

#[test]
fn records_serialize_flat() {
    let records = parse(&Options::default());
    let json = serde_json::to_value(&records[1]).expect("serializes");

    assert_eq!(json["type"], "general");
    assert_eq!(json["title"], "Local Weather Forecast");
    assert_eq!(json["cmpt_rank"], 1);
    assert_eq!(json["qry"], "weather");
    assert!(json.get("error").is_none());
}
