// Criterion benchmarks for Helper Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use helper_match::core::{pipeline::process, scoring::calculate_match_score, Matcher};
use helper_match::models::{
    Accommodation, Address, ApplicationRecord, Candidate, CandidateStatus, FilterOptions, Job, NumericValue,
    ScoringWeights, SortOption, ViewQuery,
};

const CITIES: [&str; 4] = ["Pasig", "Makati", "Taguig", "Quezon City"];
const SKILLS: [&str; 5] = ["Cooking", "Cleaning", "Laundry", "Child Care", "Driving"];

fn create_candidate(id: usize) -> Candidate {
    Candidate {
        id: id.to_string(),
        first_name: format!("Helper {}", id),
        last_name: "Santos".to_string(),
        skills: vec![
            SKILLS[id % SKILLS.len()].to_string(),
            SKILLS[(id + 2) % SKILLS.len()].to_string(),
        ],
        languages: vec!["Tagalog".to_string()],
        preferred_accommodation: Some(if id % 3 == 0 {
            Accommodation::Either
        } else {
            Accommodation::LiveIn
        }),
        expected_salary: Some(NumericValue::Number(12000.0 + (id % 20) as f64 * 500.0)),
        years_experience: Some(NumericValue::Number((id % 8) as f64)),
        address: Some(Address {
            barangay: None,
            city: Some(CITIES[id % CITIES.len()].to_string()),
            province: Some("Metro Manila".to_string()),
        }),
        status: if id % 5 == 0 {
            CandidateStatus::Employed
        } else {
            CandidateStatus::Available
        },
        is_premium: Some(id % 4 == 0),
        is_trained: Some(id % 2 == 0),
        is_verified: None,
    }
}

fn create_job() -> Job {
    Job {
        id: "job_1".to_string(),
        title: "Cook and cleaner".to_string(),
        work_types: vec!["cooking".to_string(), "cleaning".to_string()],
        language_preferences: vec!["Tagalog".to_string(), "English".to_string()],
        accommodation_type: Some(Accommodation::LiveIn),
        salary_min: Some(14000.0),
        salary_max: Some(18000.0),
        location: Some(Address {
            barangay: Some("Kapitolyo".to_string()),
            city: Some("Pasig".to_string()),
            province: Some("Metro Manila".to_string()),
        }),
    }
}

fn bench_match_score(c: &mut Criterion) {
    let candidate = create_candidate(7);
    let job = create_job();
    let weights = ScoringWeights::default();

    c.bench_function("match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&candidate), black_box(&job), black_box(&weights)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let job = create_job();
    let query = ViewQuery::default();
    let applications: Vec<ApplicationRecord> = Vec::new();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Candidate> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.rank(
                        black_box(&job),
                        black_box(candidates.clone()),
                        black_box(applications.as_slice()),
                        black_box(&query),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_filtering_pipeline(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let job = create_job();
    let candidates: Vec<Candidate> = (0..500).map(create_candidate).collect();
    let annotated = matcher.annotate(&job, candidates, &[]);

    let query = ViewQuery::default()
        .with_search("cook")
        .with_filters(FilterOptions {
            status: vec![CandidateStatus::Available],
            is_trained: Some(true),
            same_location: Some(true),
            ..Default::default()
        })
        .with_sort(SortOption::SalaryDesc);

    c.bench_function("filtering_pipeline_500_candidates", |b| {
        b.iter(|| process(black_box(annotated.clone()), black_box(&job), black_box(&query)));
    });
}

criterion_group!(benches, bench_match_score, bench_ranking, bench_filtering_pipeline);

criterion_main!(benches);
