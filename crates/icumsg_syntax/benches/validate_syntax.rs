use criterion::{criterion_group, criterion_main, Criterion};

fn get_messages() -> Vec<&'static str> {
    vec![
        "Save changes",
        "Click {HERE} to continue",
        "Test text for plural with {NUM} as number",
        "{COUNT, plural, =1 {one item} other {# items}}",
        "{COUNT, plural, offset:1 =0 {nobody} =1 {just you} other {you and # others}}",
        "{GENDER, select, female {her photo} male {his photo} other {their photo}}",
        "{RANK, selectordinal, one {#st place} two {#nd place} few {#rd place} other {#th place}}",
        "{X, plural, =1 {a {Y, select, other {z}}} other {b}}",
        "{COUNT, plural, =1 {one item} other {# items}",
        "prefix {COUNT, plural, =1 {one item} other {# items}}",
    ]
}

fn validate_comparison(c: &mut Criterion) {
    let messages = get_messages();
    let mut group = c.benchmark_group("validate");
    group.bench_function("mixed-corpus", |b| {
        b.iter(|| {
            for message in &messages {
                let _ = icumsg_syntax::validate_message(message);
            }
        })
    });
    group.bench_function("deeply-nested", |b| {
        let mut nested = String::from("leaf");
        for _ in 0..10 {
            nested = format!("{{V, select, other {{{}}}}}", nested);
        }
        b.iter(|| {
            let _ = icumsg_syntax::validate_message(&nested);
        })
    });
}

criterion_group!(benches, validate_comparison);
criterion_main!(benches);
