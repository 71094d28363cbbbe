//! End-to-end translation tests driving the engine through fixture schemes

use recast_core::DataTranslator;
use recast_testkit::{FixtureScheme, JsonScheme, SchemeError};
use serde_json::json;

#[derive(Debug, Default, Clone, PartialEq)]
struct Creature {
    hostile: bool,
    health: i64,
    speed: f64,
    name: String,

    phases: Vec<bool>,
    fibonacci: Vec<i64>,
    waypoints: Vec<f64>,
    drops: Vec<String>,
}

fn creature_translator() -> DataTranslator<Creature> {
    DataTranslator::<Creature>::new()
        .add_bool_member("scalar.bool", |c| &mut c.hostile)
        .add_int_member("scalar.int", |c| &mut c.health)
        .add_float_member("scalar.float", |c| &mut c.speed)
        .add_string_member("scalar.string", |c| &mut c.name)
        .add_bool_sequence_member("sequence.bool", |c| &mut c.phases)
        .add_int_sequence_member("sequence.int", |c| &mut c.fibonacci)
        .add_float_sequence_member("sequence.float", |c| &mut c.waypoints)
        .add_string_sequence_member("sequence.string", |c| &mut c.drops)
}

fn full_scheme() -> FixtureScheme {
    FixtureScheme::new()
        .with_bool("scalar.bool", true)
        .with_int("scalar.int", 42)
        .with_float("scalar.float", 3.14)
        .with_string("scalar.string", "hello world")
        .with_bool_sequence("sequence.bool", [true, false, true])
        .with_int_sequence("sequence.int", [1, 2, 3, 5, 8])
        .with_float_sequence("sequence.float", [0.5, 1.5, 2.5])
        .with_string_sequence("sequence.string", ["ash", "elm", "oak"])
}

#[test]
fn test_fully_populated_source_fills_every_field() {
    let mut creature = Creature::default();
    let written = creature_translator()
        .translate(&mut creature, &full_scheme())
        .unwrap();

    assert_eq!(written, 8);
    assert!(creature.hostile);
    assert_eq!(creature.health, 42);
    assert_eq!(creature.speed, 3.14);
    assert_eq!(creature.name, "hello world");
    assert_eq!(creature.phases, [true, false, true]);
    assert_eq!(creature.fibonacci, [1, 2, 3, 5, 8]);
    assert_eq!(creature.waypoints, [0.5, 1.5, 2.5]);
    assert_eq!(creature.drops, ["ash", "elm", "oak"]);
}

#[test]
fn test_absent_keys_are_skipped_and_not_counted() {
    let scheme = FixtureScheme::new().with_int("scalar.int", 7);

    let mut creature = Creature {
        name: "unchanged".to_string(),
        speed: 9.75,
        ..Creature::default()
    };
    let written = creature_translator()
        .translate(&mut creature, &scheme)
        .unwrap();

    assert_eq!(written, 1);
    assert_eq!(creature.health, 7);
    assert_eq!(creature.name, "unchanged");
    assert_eq!(creature.speed, 9.75);
    assert!(creature.fibonacci.is_empty());
}

#[test]
fn test_present_empty_sequence_counts_as_translated() {
    let scheme = FixtureScheme::new().with_int_sequence("sequence.int", Vec::new());

    let mut creature = Creature::default();
    let written = creature_translator()
        .translate(&mut creature, &scheme)
        .unwrap();

    assert_eq!(written, 1);
    assert!(creature.fibonacci.is_empty());
}

#[test]
fn test_scalar_retranslation_is_idempotent() {
    let translator = creature_translator();
    let scheme = FixtureScheme::new()
        .with_int("scalar.int", 42)
        .with_string("scalar.string", "hello world");

    let mut creature = Creature::default();
    translator.translate(&mut creature, &scheme).unwrap();
    translator.translate(&mut creature, &scheme).unwrap();

    assert_eq!(creature.health, 42);
    assert_eq!(creature.name, "hello world");
}

#[test]
fn test_sequence_retranslation_appends() {
    // Sequence fields are appended to, never cleared: translating the same
    // record twice duplicates the elements.
    let translator = creature_translator();
    let scheme = FixtureScheme::new().with_int_sequence("sequence.int", [1, 2, 3]);

    let mut creature = Creature::default();
    translator.translate(&mut creature, &scheme).unwrap();
    translator.translate(&mut creature, &scheme).unwrap();

    assert_eq!(creature.fibonacci, [1, 2, 3, 1, 2, 3]);
}

#[test]
fn test_scalars_overwrite_prior_values() {
    let mut creature = Creature {
        health: -1,
        hostile: false,
        ..Creature::default()
    };
    creature_translator()
        .translate(&mut creature, &full_scheme())
        .unwrap();

    assert_eq!(creature.health, 42);
    assert!(creature.hostile);
}

#[test]
fn test_translate_uniform_yields_identical_records() {
    let mut creatures = vec![Creature::default(); 4];
    let per_record = creature_translator()
        .translate_uniform(&mut creatures, &full_scheme())
        .unwrap();

    assert_eq!(per_record, 8);
    for creature in &creatures[1..] {
        assert_eq!(creature, &creatures[0]);
    }
    assert_eq!(creatures[0].fibonacci, [1, 2, 3, 5, 8]);
}

#[test]
fn test_source_failure_propagates_unchanged() {
    // "scalar.int" present but holding a string: the fixture's own error
    // must come back out of the engine exactly as the fixture built it.
    let scheme = FixtureScheme::new().with_string("scalar.int", "forty-two");

    let mut creature = Creature::default();
    let err = creature_translator()
        .translate(&mut creature, &scheme)
        .unwrap_err();

    assert_eq!(
        err,
        SchemeError::KindMismatch {
            key: "scalar.int".to_string(),
            expected: "int",
            found: "string",
        }
    );
}

#[test]
fn test_json_backed_source_resolves_dotted_keys() {
    let translator = DataTranslator::<Creature>::new()
        .add_string_member("creature.name", |c| &mut c.name)
        .add_int_member("creature.stats.health", |c| &mut c.health)
        .add_float_member("creature.stats.speed", |c| &mut c.speed)
        .add_bool_member("creature.stats.hostile", |c| &mut c.hostile)
        .add_string_sequence_member("creature.drops", |c| &mut c.drops);

    let scheme = JsonScheme::new(json!({
        "creature": {
            "name": "gloom shrike",
            "stats": { "health": 240, "speed": 1.25, "hostile": true },
            "drops": ["feather", "talon"],
        }
    }));

    let mut creature = Creature::default();
    let written = translator.translate(&mut creature, &scheme).unwrap();

    assert_eq!(written, 5);
    assert_eq!(creature.name, "gloom shrike");
    assert_eq!(creature.health, 240);
    assert_eq!(creature.speed, 1.25);
    assert!(creature.hostile);
    assert_eq!(creature.drops, ["feather", "talon"]);
}
