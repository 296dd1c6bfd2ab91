//! Performance benchmarks for the Accomplishment Report Engine.
//!
//! This benchmark suite tracks the filter → group → render hot path and
//! the full HTTP round trip:
//! - Filter and group over 100 records
//! - Full pipeline (filter, group, render, deliver) over 100 records
//! - Full API round trip with 1000 records
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;

use report_engine::api::{AppState, create_router};
use report_engine::config::InstitutionConfig;
use report_engine::models::{FilterCriteria, Owner, OwnerSelector, Period, ProductionRecord};
use report_engine::report::{
    BufferSurface, filter_records, generate_report_from_records, group_by_category, group_by_owner,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const OWNER_IDS: &[&str] = &["E1", "E2", "E3", "E4", "E5"];
const CATEGORIES: &[&str] = &["Sewing", "Cutting", "Embroidery", "Pressing"];

/// Creates a record collection spread across owners, categories, and months.
fn create_records(count: usize) -> Vec<ProductionRecord> {
    (0..count)
        .map(|i| {
            let month = (i % 12) as u32 + 1;
            let day = (i % 28) as u32 + 1;
            let completed = NaiveDate::from_ymd_opt(2024, month, day)
                .unwrap()
                .and_hms_opt(16, 0, 0)
                .unwrap();
            let owner_id = OWNER_IDS[i % OWNER_IDS.len()];
            ProductionRecord {
                id: format!("rec_{:04}", i),
                owner: Owner::new(owner_id, format!("Employee {}", owner_id)),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                started_at: completed - chrono::Duration::days(2),
                completed_at: completed,
            }
        })
        .collect()
}

fn march_criteria() -> FilterCriteria {
    FilterCriteria::new(OwnerSelector::All, Period::month(2024, 3).unwrap())
}

fn bench_filter_and_group(c: &mut Criterion) {
    let records = create_records(100);
    let criteria = march_criteria();

    c.bench_function("filter_100_records", |b| {
        b.iter(|| filter_records(black_box(&records), black_box(&criteria)))
    });

    let subset = filter_records(&records, &criteria);
    c.bench_function("group_filtered_subset", |b| {
        b.iter(|| {
            (
                group_by_category(black_box(&subset)),
                group_by_owner(black_box(&subset)),
            )
        })
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let records = create_records(100);
    let criteria = march_criteria();
    let institution = InstitutionConfig::default();

    c.bench_function("pipeline_100_records", |b| {
        b.iter(|| {
            let mut surface = BufferSurface::new();
            generate_report_from_records(
                black_box(&records),
                black_box(&criteria),
                &institution,
                &mut surface,
            )
            .unwrap()
        })
    });
}

fn bench_api_round_trip(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("api_round_trip");
    for count in [100usize, 1000] {
        let records = create_records(count);
        let body = serde_json::json!({
            "records": records,
            "criteria": {"owner": "all", "mode": "month", "month": 3, "year": 2024}
        })
        .to_string();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &body, |b, body| {
            b.to_async(&runtime).iter(|| async {
                let router = create_router(AppState::new(InstitutionConfig::default()));
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/report")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_filter_and_group,
    bench_full_pipeline,
    bench_api_round_trip
);
criterion_main!(benches);
