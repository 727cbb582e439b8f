//! Performance benchmarks for ucplan.
//!
//! This module contains benchmarks for:
//! - Markdown generation (single phase and all phases)
//! - HTML preview of generated documents
//! - Form state loading through the file storage
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ucplan::core::{FileStorage, FormState, StateStore, StoragePort, DEFAULT_STORAGE_KEY};
use ucplan::markdown::{MarkdownGenerator, PhaseExportRecord};
use ucplan::{markdown_to_html, phases};

// ============================================================================
// Mock Data Fixtures
// ============================================================================

mod fixtures {
    use super::*;

    /// Form state with every field of the first `filled_phases` phases
    /// answered, plus scores, ticked checklists and both stakeholders.
    pub fn form_state(filled_phases: usize) -> FormState {
        let mut form = FormState::new();

        for phase in phases().iter().take(filled_phases) {
            for field in &phase.form_fields {
                form.insert(
                    field.id.clone(),
                    format!("Answer for {} with **bold** detail\nand a second line", field.label),
                );
            }
            for (i, axis) in phase.scoring_axes.iter().enumerate() {
                form.insert(axis.score_key(), ((i % 5) + 1).to_string());
            }
            for i in 0..phase.checklist_questions.len() {
                form.insert(phase.checklist_key(i), if i % 2 == 0 { "true" } else { "false" });
            }
        }

        for (key, value) in [
            ("ownerName", "Ada Lovelace"),
            ("ownerRole", "Digital Marketing Manager"),
            ("ownerEmail", "ada@example.com"),
            ("supportName", "Grace Hopper"),
            ("supportRole", "Data Scientist"),
        ] {
            form.insert(key, value);
        }

        form
    }
}

// ============================================================================
// Generation Benchmarks
// ============================================================================

fn bench_phase_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown/phase");
    let generator = MarkdownGenerator::new();
    let form = fixtures::form_state(9);

    for phase in phases() {
        let record = PhaseExportRecord::new(phase, form.clone());
        group.bench_with_input(BenchmarkId::new("generate", phase.id), &record, |b, record| {
            b.iter(|| black_box(generator.phase(black_box(record))));
        });
    }

    group.finish();
}

fn bench_all_phases_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown/all_phases");
    let generator = MarkdownGenerator::new();

    for filled in [0, 3, 9] {
        let records = PhaseExportRecord::all(phases(), &fixtures::form_state(filled));
        group.bench_with_input(BenchmarkId::new("generate", filled), &records, |b, records| {
            b.iter(|| black_box(generator.all_phases(black_box(records))));
        });
    }

    group.finish();
}

// ============================================================================
// Preview Benchmarks
// ============================================================================

fn bench_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview");
    let generator = MarkdownGenerator::new();

    for filled in [0, 9] {
        let records = PhaseExportRecord::all(phases(), &fixtures::form_state(filled));
        let markdown = generator.all_phases(&records);

        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(BenchmarkId::new("to_html", filled), &markdown, |b, markdown| {
            b.iter(|| black_box(markdown_to_html(black_box(markdown))));
        });
    }

    group.finish();
}

// ============================================================================
// Storage Benchmarks
// ============================================================================

fn bench_store_open(c: &mut Criterion) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let storage = FileStorage::new(temp_dir.path());
    let json = serde_json::to_string(&fixtures::form_state(9)).expect("Failed to serialize");
    storage.write(DEFAULT_STORAGE_KEY, &json).expect("Failed to write state");

    c.bench_function("store/open", |b| {
        b.iter(|| {
            let store = StateStore::open(storage.clone(), DEFAULT_STORAGE_KEY);
            black_box(store.state().len())
        });
    });
}

criterion_group!(markdown_benches, bench_phase_markdown, bench_all_phases_markdown,);

criterion_group!(preview_benches, bench_preview,);

criterion_group!(storage_benches, bench_store_open,);

criterion_main!(markdown_benches, preview_benches, storage_benches,);
