//! Performance benchmarks for frame rendering and status reconciliation
//!
//! Measures a full redraw of both screens and the masked-status merge for
//! growing exchange counts.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;

use arbkeys::adapters::MockHttpClient;
use arbkeys::api::BackendClient;
use arbkeys::app::{App, AppMessage, Screen};
use arbkeys::config::ClientConfig;
use arbkeys::domain::{CredentialForm, MaskedCredentialStatus};
use arbkeys::ui::render;
use arbkeys::workflows::{reconciler, StatusMap};

fn exchange_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("exchange{}", i)).collect()
}

/// Every other exchange has a stored key and secret.
fn generate_statuses(exchanges: &[String]) -> StatusMap {
    exchanges
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(i, e)| {
            (
                e.clone(),
                MaskedCredentialStatus {
                    has_api_key: true,
                    api_key_masked: Some(format!("****{:04}", i)),
                    has_api_secret: true,
                    api_secret_masked: Some("****".to_string()),
                    ..Default::default()
                },
            )
        })
        .collect()
}

fn build_app(count: usize) -> App {
    let exchanges = exchange_names(count);
    let config = ClientConfig::new().with_exchanges(exchanges.clone());
    let backend = BackendClient::new(Arc::new(MockHttpClient::new()), "http://bench");
    let mut app = App::with_backend(config, backend);
    app.handle_message(AppMessage::StatusLoaded(generate_statuses(&exchanges)));
    app
}

/// Benchmark a full redraw of each screen
fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");

    for screen in [Screen::Credentials, Screen::Overview] {
        for count in [1, 6, 24] {
            let mut app = build_app(count);
            app.screen = screen;
            let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

            group.bench_with_input(
                BenchmarkId::new(screen.title(), format!("{}_exchanges", count)),
                &app,
                |b, app| {
                    b.iter(|| {
                        terminal.draw(|f| render(f, black_box(app))).unwrap();
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark merging a masked status map into the form
fn bench_reconcile_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile_apply");

    for count in [6, 50, 200] {
        let exchanges = exchange_names(count);
        let statuses = generate_statuses(&exchanges);
        let form = CredentialForm::new(exchanges);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &statuses, |b, statuses| {
            b.iter(|| {
                let mut form = form.clone();
                black_box(reconciler::apply(&mut form, black_box(statuses)))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_frame, bench_reconcile_apply);
criterion_main!(benches);
