use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use questionnaire::{ProfileRegistry, Validator};
use std::hint::black_box;

/// Generate content for a specific validation scenario
fn generate_validation_content(blocks: usize, scenario: &str) -> String {
    let mut content = String::from("# Анкета №1 по проекту \"HSE-Announce\"\n");

    for b in 0..blocks {
        content.push_str(&format!("## Блок {}\n", b + 1));
        match scenario {
            "all_valid" => {
                for q in 0..10 {
                    content.push_str(&format!("{}. Вопрос {}\n- да\n- нет\n", q + 1, q + 1));
                }
            }
            "empty_blocks" => {
                if b % 2 == 0 {
                    content.push_str("1. Единственный вопрос\n");
                }
            }
            "unexpected_text" => {
                for q in 0..10 {
                    content.push_str(&format!("{}. Вопрос\nпояснение без разметки\n", q + 1));
                }
            }
            _ => unreachable!(),
        }
    }

    content
}

fn bench_validation_scenarios(c: &mut Criterion) {
    let registry = ProfileRegistry::with_builtin().expect("built-in profile");
    let profile = registry.select(None).expect("default profile");
    let validator = Validator::new(profile).expect("header regex");

    let mut group = c.benchmark_group("validate");
    for scenario in ["all_valid", "empty_blocks", "unexpected_text"] {
        let content = generate_validation_content(50, scenario);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new(scenario, 50),
            &content,
            |b, content| b.iter(|| black_box(validator.validate(black_box(content)))),
        );
    }
    group.finish();
}

fn bench_validator_construction(c: &mut Criterion) {
    let registry = ProfileRegistry::with_builtin().expect("built-in profile");
    let profile = registry.select(None).expect("default profile");

    c.bench_function("validator_new", |b| {
        b.iter(|| black_box(Validator::new(black_box(profile))))
    });
}

criterion_group!(
    validation_benches,
    bench_validation_scenarios,
    bench_validator_construction
);

criterion_main!(validation_benches);
