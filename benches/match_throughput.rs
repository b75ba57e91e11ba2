//! Match throughput: first-match scan cost over a realistic table.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use waypost::{BuildParams, RouteTable};

fn populated_table() -> RouteTable {
    let mut table = RouteTable::new();
    table.register("home", "/", None).unwrap();
    table.register("about", "/about", None).unwrap();
    table.register("books", "/books", None).unwrap();
    table.register("book", "/books/:id", None).unwrap();
    table
        .register("book-edition", "/books/:slug-:id/editions/:edition", None)
        .unwrap();
    table.register("authors", "/authors", None).unwrap();
    table.register("author", "/authors/:id", None).unwrap();
    table
        .register("author-books", "/authors/:id/books", None)
        .unwrap();
    table.register("search", "/search", None).unwrap();
    table.register("settings", "/settings/:section", None).unwrap();
    table
}

fn bench_match(c: &mut Criterion) {
    let table = populated_table();

    c.bench_function("match_first_entry", |b| {
        b.iter(|| table.match_location(black_box("/"), "", ""))
    });

    c.bench_function("match_last_entry_with_args", |b| {
        b.iter(|| table.match_location(black_box("/settings/profile"), "", ""))
    });

    c.bench_function("match_miss_scans_whole_table", |b| {
        b.iter(|| table.match_location(black_box("/no/such/route"), "", ""))
    });

    c.bench_function("match_with_query_and_hash", |b| {
        b.iter(|| {
            table.match_location(
                black_box("/books/12"),
                black_box("show=author&show=isbn"),
                black_box("menu=1"),
            )
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let table = populated_table();
    let params = BuildParams::new()
        .arg("slug", "old")
        .arg("id", 1234)
        .arg("edition", "2nd");

    c.bench_function("build_url_three_args", |b| {
        b.iter(|| table.build_url(black_box("book-edition"), &params))
    });
}

criterion_group!(benches, bench_match, bench_build);
criterion_main!(benches);
