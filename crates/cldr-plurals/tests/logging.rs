use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cldr_plurals::{PluralCategory, PluralRules, RuleSet, parse_rule, verify_rule_set};
use tracing::subscriber::with_default;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry;

struct WarningCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarningCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_warnings(f: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = registry().with(WarningCounter(Arc::clone(&count)));
    with_default(subscriber, f);
    count.load(Ordering::SeqCst)
}

fn broken_rules() -> RuleSet {
    RuleSet::new(vec![
        (PluralCategory::One, "i = 1 and q = 2 @integer 1".to_string()),
        (PluralCategory::Few, "i is 3".to_string()),
        (PluralCategory::Other, " @integer 0, 2~16".to_string()),
    ])
}

#[test]
fn parsing_warns_once_per_bad_clause() {
    let warnings = count_warnings(|| {
        parse_rule("i = 1 and q = 2");
    });
    assert_eq!(warnings, 1);

    let warnings = count_warnings(|| {
        PluralRules::compile(&broken_rules());
    });
    assert_eq!(warnings, 2);
}

#[test]
fn validation_reports_without_logging() {
    let rules = broken_rules();
    let mut found = Vec::new();
    let warnings = count_warnings(|| found = rules.validate("xx"));
    assert_eq!(found.len(), 2);
    assert_eq!(warnings, 0);
}

#[test]
fn verification_logs_each_bad_clause_once() {
    let rules = broken_rules();
    let warnings = count_warnings(|| {
        verify_rule_set(&rules);
    });
    assert_eq!(warnings, 2);
}
