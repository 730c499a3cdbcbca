use linksieve::{ExtractOptions, extract_links_from_message, is_allowed_url};
use std::collections::HashSet;
use url::Url;

const MESSAGES: &[&str] = &[
    "",
    "no links at all",
    "https://a.example https://a.example https://b.example/x?y=z#w",
    "[label](https://hidden.example) https://shown.example [x](http://127.0.0.1)",
    "http://localhost http://[::1] http://192.168.1.1 https://ok.example/path.",
    "http:// https://[broken https://good.example) (https://paren.example)",
    "HTTP://UPPER.example\nhttps://next.example\thttps://tab.example",
    "ftp://nope.example mailto:me@example.com javascript:alert(1) https://yes.example",
    "https://1.example https://2.example https://3.example https://4.example https://5.example \
     https://6.example https://7.example",
    "http://300.1.1.1 http://8.8.4.4 http://100.64.1.1 http://100.128.1.1",
    "[[nested](https://a.example)](https://b.example) trailing https://c.example",
];

const CAPS: &[Option<f64>] = &[None, Some(1.0), Some(2.5), Some(5.0), Some(0.0), Some(f64::NAN)];

fn every_extraction() -> impl Iterator<Item = (&'static str, ExtractOptions, Vec<String>)> {
    MESSAGES.iter().flat_map(|message| {
        CAPS.iter().map(move |cap| {
            let options = ExtractOptions { max_links: *cap };
            let links = extract_links_from_message(*message, &options);
            (*message, options, links)
        })
    })
}

#[test]
fn result_never_exceeds_cap() {
    for (message, options, links) in every_extraction() {
        assert!(
            links.len() <= options.resolve_max_links(),
            "{message:?} with {options:?} returned {links:?}"
        );
    }
}

#[test]
fn results_are_valid_safe_http_urls() {
    for (message, _, links) in every_extraction() {
        for link in links {
            let parsed = Url::parse(&link).unwrap_or_else(|e| panic!("{link} from {message:?}: {e}"));
            assert!(matches!(parsed.scheme(), "http" | "https"));
            assert!(is_allowed_url(&link), "{link} should be allowed");
        }
    }
}

#[test]
fn results_have_no_duplicates() {
    for (message, _, links) in every_extraction() {
        let unique: HashSet<_> = links.iter().collect();
        assert_eq!(unique.len(), links.len(), "duplicates in {message:?}: {links:?}");
    }
}

#[test]
fn extraction_is_idempotent_per_link() {
    for (_, _, links) in every_extraction() {
        for link in links {
            assert_eq!(
                extract_links_from_message(link.as_str(), &ExtractOptions::default()),
                vec![link.clone()]
            );
        }
    }
}

#[test]
fn results_follow_source_order() {
    for (message, _, links) in every_extraction() {
        let mut cursor = 0;
        for link in &links {
            let offset = message[cursor..]
                .find(link.as_str())
                .unwrap_or_else(|| panic!("{link} out of order in {message:?}"));
            cursor += offset + link.len();
        }
    }
}

#[test]
fn uncapped_run_keeps_first_occurrences() {
    let links = extract_links_from_message(
        MESSAGES[2],
        &ExtractOptions::with_max_links(10.0),
    );
    assert_eq!(links, vec!["https://a.example", "https://b.example/x?y=z#w"]);
}
