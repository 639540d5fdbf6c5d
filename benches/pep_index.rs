use criterion::{criterion_group, criterion_main, Criterion, black_box};
use url::Url;

use pydoc_scrape::core::html;
use pydoc_scrape::specs::peps;

/// Synthetic index about the size of the live one.
fn sample_index(rows: u32) -> String {
    let codes = ["PA", "SF", "IF", "SD", "SR", "S", "IA", "SW", "SS"];
    let body: String = (1..=rows)
        .map(|n| {
            let abbr = codes[n as usize % codes.len()];
            format!(r#"<tr><td><abbr>{abbr}</abbr></td><td><a href="pep-{n:04}/">{n}</a></td><td>Title {n}</td><td>Author</td></tr>"#)
        })
        .collect();
    format!(r#"<html><body><section id="numerical-index"><table><tbody>{body}</tbody></table></section></body></html>"#)
}

fn bench_pep_index(c: &mut Criterion) {
    let doc = sample_index(700);
    let base = Url::parse("https://peps.python.org/").unwrap();

    c.bench_function("pep_index_parse", |b| {
        b.iter(|| {
            let parsed = html::parse(black_box(&doc));
            let rows = peps::index_entries(&parsed, &base).unwrap();
            black_box(rows.len())
        })
    });

    let parsed = html::parse(&doc);
    c.bench_function("pep_index_entries", |b| {
        b.iter(|| {
            let rows = peps::index_entries(black_box(&parsed), &base).unwrap();
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_pep_index);
criterion_main!(benches);
