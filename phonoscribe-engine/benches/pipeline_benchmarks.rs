//! Performance benchmarks for the transcription pipelines
//!
//! Run with: cargo bench --bench pipeline_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use phonoscribe_engine::{Language, Transcriber};
use std::hint::black_box;

/// Sample sentence per language, repeated to build larger inputs
fn sample(language: Language) -> &'static str {
    match language {
        Language::Belarusian => "Галава́ баліць, а снег ідзе. ",
        Language::Bulgarian => "В се́ло има ки́но и гра́д. ",
        Language::Czech => "Kde je pes? Děti jsou ve městě. ",
        Language::Greek => "Καλημέρα, τον πατέρα δεν ξέρω. ",
        Language::Nahuatl => "Nican quetzalcoatl xochitl calli. ",
        Language::Polish => "Przez rzekę, ręka w rękę. ",
        Language::Slovak => "V dome je stôl a voda. ",
        Language::Spanish => "¿Dónde está el perro? Pan y agua. ",
        Language::Ukrainian => "Голова́ і яблуко, життя́ край. ",
        Language::Serbian => "Пас је велик, ЊЕГОВ конь. ",
    }
}

/// Generate test text of specified size
fn generate_text(language: Language, size: usize) -> String {
    let base = sample(language);
    let repeat_count = size / base.len() + 1;
    let mut text = base.repeat(repeat_count);
    let mut end = size.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text
}

/// Benchmark every pipeline on the same input size
fn bench_languages(c: &mut Criterion) {
    let mut group = c.benchmark_group("languages");

    for &language in Language::all() {
        let text = generate_text(language, 10_240);
        let transcriber = Transcriber::new(language);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new(language.code(), text.len()),
            &text,
            |b, text| {
                b.iter(|| {
                    let _ = transcriber.transcribe(black_box(text)).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark scaling with input size
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let transcriber = Transcriber::new(Language::Czech);

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(Language::Czech, size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("czech", size), &text, |b, text| {
            b.iter(|| {
                let _ = transcriber.transcribe(black_box(text)).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark batch transcription, sequential and through a sized pool
fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batches");
    let texts: Vec<String> = (0..256)
        .map(|_| generate_text(Language::Spanish, 1024))
        .collect();

    group.throughput(Throughput::Elements(texts.len() as u64));

    group.bench_function("sequential", |b| {
        let transcriber = Transcriber::new(Language::Spanish);
        b.iter(|| {
            for text in &texts {
                let _ = transcriber.transcribe(black_box(text)).unwrap();
            }
        });
    });

    #[cfg(feature = "parallel")]
    for threads in [2, 4] {
        group.bench_with_input(
            BenchmarkId::new("parallel", threads),
            &texts,
            |b, texts| {
                let transcriber = Transcriber::builder()
                    .language("es")
                    .threads(Some(threads))
                    .build()
                    .unwrap();
                b.iter(|| {
                    let _ = transcriber.transcribe_batch(black_box(texts)).unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_languages, bench_text_sizes, bench_batches);
criterion_main!(benches);
