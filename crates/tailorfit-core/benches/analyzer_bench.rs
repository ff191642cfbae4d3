use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tailorfit_core::analysis::Analyzer;

const JOB: &str = "Senior Backend Engineer\n\
Requirements: Python, SQL, distributed systems, Linux\n\
Must have: strong communication skills\n\
Preferred: Docker, Kubernetes, Terraform\n\
Nice to have: Kafka\n\
5+ years of experience building scalable services. Senior level role.\n\
Education: Bachelor's degree in Computer Science or equivalent; MS a plus.";

const RESUME: &str = "Jane Doe\njane@example.com 555-0100 Austin, TX\n\n\
Professional Summary\nBackend engineer building reliable data pipelines in Python and Go.\n\n\
Professional Experience\nAcme - Engineer\n01/2020 - Present\n\
Designed APIs, maintained PostgreSQL clusters and deployed services on Linux.\n\n\
Skills\nPython, Go, PostgreSQL, Linux";

fn bench_analyzer(c: &mut Criterion) {
    let analyzer = Analyzer::default().unwrap();

    c.bench_function("analyze_job_description", |b| {
        b.iter(|| analyzer.analyze_job_description(black_box(JOB)));
    });

    c.bench_function("extract_keywords_resume", |b| {
        b.iter(|| analyzer.extract_keywords(black_box(RESUME)));
    });

    c.bench_function("get_optimization_suggestions", |b| {
        b.iter(|| analyzer.get_optimization_suggestions(black_box(RESUME), black_box(JOB)));
    });

    c.bench_function("optimize_text", |b| {
        b.iter(|| analyzer.optimize_text(black_box(RESUME)));
    });
}

criterion_group!(benches, bench_analyzer);
criterion_main!(benches);
