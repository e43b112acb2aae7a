use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use hanzi_types::{CharacterRecord, Origin};

use crate::dictionary::{DictionarySource, RawEntry};
use crate::error::{LookupError, SourceError};
use crate::fallback::FallbackTable;
use crate::language::LanguageProcessor;
use crate::preprocess::Preprocessor;
use crate::resolver::Resolver;

struct StubProcessor;

impl Preprocessor for StubProcessor {}

#[async_trait::async_trait]
impl LanguageProcessor for StubProcessor {
    fn language_code(&self) -> &str {
        "zh"
    }

    async fn build_record(&self, entry: RawEntry) -> CharacterRecord {
        CharacterRecord {
            character: entry.character,
            pronunciation: entry.pronunciation,
            tone: 0,
            meaning_local: entry.definition.clone(),
            meaning_source: entry.definition,
            stroke_count: entry.stroke_count.unwrap_or(0),
            proficiency_level: 2,
            example_words: vec![],
        }
    }
}

enum Behaviour {
    Serve(HashMap<String, RawEntry>),
    Fail,
    Blank,
}

struct ScriptedSource {
    name: &'static str,
    behaviour: Behaviour,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSource {
    fn serving(name: &'static str, entries: &[(&str, &str, &str)]) -> Self {
        let entries = entries
            .iter()
            .map(|(c, p, d)| (c.to_string(), RawEntry::new(c, p, d)))
            .collect();
        Self::new(name, Behaviour::Serve(entries))
    }

    fn failing(name: &'static str) -> Self {
        Self::new(name, Behaviour::Fail)
    }

    fn new(name: &'static str, behaviour: Behaviour) -> Self {
        Self {
            name,
            behaviour,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait::async_trait]
impl DictionarySource for ScriptedSource {
    fn name(&self) -> &str {
        self.name
    }

    async fn fetch(&self, character: &str) -> Result<RawEntry, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.behaviour {
            Behaviour::Serve(entries) => entries
                .get(character)
                .cloned()
                .ok_or_else(|| SourceError::NotListed(character.to_string())),
            Behaviour::Fail => Err(SourceError::Status(503)),
            Behaviour::Blank => Ok(RawEntry::new(character, "", "")),
        }
    }
}

fn fallback() -> FallbackTable {
    FallbackTable::from_records([CharacterRecord {
        character: "学".to_string(),
        pronunciation: "xué".to_string(),
        tone: 2,
        meaning_local: "lernen, studieren".to_string(),
        meaning_source: "to learn, to study".to_string(),
        stroke_count: 8,
        proficiency_level: 1,
        example_words: vec![],
    }])
}

fn resolver() -> Resolver {
    Resolver::new(Arc::new(StubProcessor))
}

#[tokio::test]
async fn fallback_serves_when_every_source_fails() {
    let first = ScriptedSource::failing("first");
    let second = ScriptedSource::failing("second");
    let (c1, c2) = (first.counter(), second.counter());

    let resolver = resolver()
        .with_source(first)
        .with_source(second)
        .with_fallback(fallback());

    let resolved = resolver.resolve("学").await.unwrap().unwrap();
    assert_eq!(resolved.origin, Origin::Fallback);
    assert_eq!(resolved.record.stroke_count, 8);
    assert_eq!(c1.load(Ordering::SeqCst), 1);
    assert_eq!(c2.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn second_lookup_is_served_from_cache() {
    let source = ScriptedSource::serving("remote", &[("水", "shuǐ", "water")]);
    let calls = source.counter();
    let resolver = resolver().with_source(source);

    let first = resolver.resolve("水").await.unwrap().unwrap();
    let second = resolver.resolve("水").await.unwrap().unwrap();

    assert_eq!(first.origin, Origin::Source("remote".to_string()));
    assert_eq!(second.origin, Origin::Cache);
    assert_eq!(first.record, second.record);
    assert!(Arc::ptr_eq(&first.record, &second.record));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(resolver.cache_len().await, 1);
}

#[tokio::test]
async fn first_successful_source_wins() {
    let primary = ScriptedSource::serving("primary", &[("火", "huǒ", "fire")]);
    let secondary = ScriptedSource::serving("secondary", &[("火", "huo3", "flame")]);
    let secondary_calls = secondary.counter();

    let resolver = resolver().with_source(primary).with_source(secondary);
    assert_eq!(resolver.source_names(), vec!["primary", "secondary"]);

    let resolved = resolver.resolve("火").await.unwrap().unwrap();
    assert_eq!(resolved.origin, Origin::Source("primary".to_string()));
    assert_eq!(resolved.record.meaning_source, "fire");
    assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failing_source_falls_through_to_next() {
    let resolver = resolver()
        .with_source(ScriptedSource::failing("down"))
        .with_source(ScriptedSource::serving("up", &[("山", "shān", "mountain")]));

    let resolved = resolver.resolve("山").await.unwrap().unwrap();
    assert_eq!(resolved.origin, Origin::Source("up".to_string()));
    assert!(resolver.cached("山").await.is_some());
}

#[tokio::test]
async fn blank_entry_counts_as_unavailable() {
    let blank = ScriptedSource::new("blank", Behaviour::Blank);
    let resolver = resolver()
        .with_source(blank)
        .with_source(ScriptedSource::serving("real", &[("木", "mù", "tree")]));

    let resolved = resolver.resolve("木").await.unwrap().unwrap();
    assert_eq!(resolved.origin, Origin::Source("real".to_string()));
}

#[tokio::test]
async fn fallback_hits_are_not_cached() {
    let source = ScriptedSource::failing("down");
    let calls = source.counter();
    let resolver = resolver().with_source(source).with_fallback(fallback());

    resolver.resolve("学").await.unwrap().unwrap();
    let again = resolver.resolve("学").await.unwrap().unwrap();

    assert_eq!(again.origin, Origin::Fallback);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(resolver.cache_len().await, 0);
}

#[tokio::test]
async fn unknown_character_is_not_found() {
    let resolver = resolver()
        .with_source(ScriptedSource::failing("down"))
        .with_source(ScriptedSource::serving("sparse", &[]))
        .with_fallback(fallback());

    assert!(resolver.resolve("龘").await.unwrap().is_none());
}

#[tokio::test]
async fn empty_input_is_rejected_before_lookup() {
    let source = ScriptedSource::serving("remote", &[]);
    let calls = source.counter();
    let resolver = resolver().with_source(source);

    assert_eq!(resolver.resolve("   ").await.unwrap_err(), LookupError::InputInvalid);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn input_is_trimmed_before_cache_lookup() {
    let source = ScriptedSource::serving("remote", &[("月", "yuè", "moon")]);
    let calls = source.counter();
    let resolver = resolver().with_source(source);

    resolver.resolve(" 月\n").await.unwrap().unwrap();
    let cached = resolver.resolve("月").await.unwrap().unwrap();
    assert_eq!(cached.origin, Origin::Cache);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn concurrent_lookups_share_one_fetch() {
    let source = ScriptedSource::serving("slow", &[("日", "rì", "sun")])
        .slow(Duration::from_millis(50));
    let calls = source.counter();
    let resolver = Arc::new(resolver().with_source(source));

    let (a, b) = tokio::join!(resolver.resolve("日"), resolver.resolve("日"));
    let (a, b) = (a.unwrap().unwrap(), b.unwrap().unwrap());

    assert!(Arc::ptr_eq(&a.record, &b.record));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn abandoned_lookup_leaves_no_key_lock_behind() {
    let source = ScriptedSource::serving("slow", &[("月", "yuè", "moon")])
        .slow(Duration::from_millis(200));
    let resolver = resolver().with_source(source);

    let abandoned = tokio::time::timeout(Duration::from_millis(20), resolver.resolve("月")).await;
    assert!(abandoned.is_err());
    assert_eq!(resolver.cache.in_flight_len(), 0);

    let resolved = resolver.resolve("月").await.unwrap().unwrap();
    assert_eq!(resolved.record.meaning_source, "moon");
    assert_eq!(resolver.cache.in_flight_len(), 0);
}
