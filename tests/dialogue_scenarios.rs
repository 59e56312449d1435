//! End-to-end dialogue scenarios.
//!
//! Drives `AgroAidBot` with scripted input against in-memory models and
//! checks the exact message stream and the session state after each cycle.

use proptest::prelude::*;

use agro_aid::adapters::mock::{FixedClassifier, RecordingSink};
use agro_aid::adapters::models::{EncoderSet, FittedLabelEncoder};
use agro_aid::domain::dialogue::{
    messages, AgroAidBot, DialogueMode, CROP_FIELDS, FERTILIZER_FIELDS,
};
use agro_aid::domain::prediction::{CropRecommender, FertilizerRecommender, ModelSuite};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn suite() -> ModelSuite {
    let mut crop = EncoderSet::new();
    crop.insert(FittedLabelEncoder::fit("Crop", ["Rice", "Wheat"]));
    crop.insert(FittedLabelEncoder::fit("Soil_Type", ["Alluvial", "Loamy", "Sandy"]));
    crop.insert(FittedLabelEncoder::fit("Variety", ["HD-2967", "PBW-343"]));

    let mut fertilizer = EncoderSet::new();
    fertilizer.insert(FittedLabelEncoder::fit("Soil_Type", ["Black", "Loamy", "Sandy"]));
    fertilizer.insert(FittedLabelEncoder::fit("Crop", ["Maize", "Wheat"]));
    fertilizer.insert(FittedLabelEncoder::fit("FertilizerName", ["DAP", "Urea"]));

    ModelSuite::new(
        CropRecommender::new(
            Box::new(FixedClassifier::new(7, vec!["Crop", "Soil_Type", "Variety"], vec![1, 1, 0])),
            Box::new(crop),
        ),
        FertilizerRecommender::new(
            Box::new(FixedClassifier::new(8, vec!["FertilizerName"], vec![1])),
            Box::new(fertilizer),
        ),
    )
}

fn bot() -> AgroAidBot<RecordingSink> {
    AgroAidBot::new(suite(), RecordingSink::new())
}

/// Feeds all but the last input, clears the sink, then feeds the last one.
fn last_step_messages(bot: &mut AgroAidBot<RecordingSink>, inputs: &[&str]) -> Vec<String> {
    let (last, before) = inputs.split_last().expect("non-empty script");
    for input in before {
        bot.process_input(input);
    }
    bot.sink_mut().clear();
    bot.process_input(last);
    bot.sink().messages().to_vec()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn crop_scenario_reports_soil_and_variety_then_idles() {
    let mut bot = bot();

    let emitted = last_step_messages(
        &mut bot,
        &["1", "10", "20", "15", "25", "70", "6.5", "200"],
    );

    assert_eq!(
        emitted,
        vec![
            "✅ Suitable Soil Type: Loamy",
            "🌾 Recommended Crop Variety: HD-2967",
            messages::BACK_TO_MENU,
        ]
    );
    assert_eq!(bot.session().mode(), DialogueMode::Idle);
}

#[test]
fn fertilizer_scenario_names_one_fertilizer_then_idles() {
    let mut bot = bot();

    let emitted = last_step_messages(
        &mut bot,
        &["2", "26", "75", "40", "Loamy", "Wheat", "50", "30", "40"],
    );

    assert_eq!(
        emitted,
        vec!["💡 Recommended Fertilizer: Urea", messages::BACK_TO_MENU]
    );
    assert_eq!(bot.session().mode(), DialogueMode::Idle);
}

#[test]
fn non_numeric_fertilizer_value_yields_single_error_then_idles() {
    let mut bot = bot();

    let emitted = last_step_messages(
        &mut bot,
        &["2", "26", "x", "40", "Loamy", "Wheat", "50", "30", "40"],
    );

    assert_eq!(
        emitted,
        vec![
            "❌ Error during fertilizer recommendation: \
             could not convert string to float: 'x' (Humidity)",
            messages::BACK_TO_MENU,
        ]
    );
    assert_eq!(bot.session().mode(), DialogueMode::Idle);
    assert!(bot.session().answers().is_empty());
}

#[test]
fn invalid_menu_choice_leaves_state_untouched() {
    let mut bot = bot();

    bot.process_input("5");

    assert_eq!(bot.sink().messages(), &[messages::INVALID_OPTION]);
    assert_eq!(bot.session().mode(), DialogueMode::Idle);
    assert_eq!(bot.session().cursor(), 0);
    assert!(bot.session().answers().is_empty());
}

#[test]
fn session_survives_many_cycles() {
    let mut bot = bot();
    let crop = ["1", "10", "20", "15", "25", "70", "6.5", "200"];
    let fertilizer = ["2", "26", "75", "40", "Loamy", "Wheat", "50", "30", "40"];

    for _ in 0..3 {
        for input in crop.iter().chain(fertilizer.iter()) {
            bot.process_input(input);
        }
    }

    let results = bot
        .sink()
        .messages()
        .iter()
        .filter(|m| m.starts_with("💡") || m.starts_with("✅"))
        .count();
    assert_eq!(results, 6);
    assert!(bot.session().mode().is_idle());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn non_numeric_crop_value_yields_single_error(
        position in 0usize..7,
        garbage in "[a-zA-Z][a-zA-Z ]{0,10}",
    ) {
        let mut bot = bot();
        let mut script: Vec<String> = ["1", "10", "20", "15", "25", "70", "6.5", "200"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        script[position + 1] = garbage;
        let refs: Vec<&str> = script.iter().map(String::as_str).collect();

        let emitted = last_step_messages(&mut bot, &refs);

        prop_assert_eq!(emitted.len(), 2);
        prop_assert!(emitted[0].starts_with("❌ Error during crop prediction:"));
        prop_assert!(emitted[0].contains(CROP_FIELDS[position]));
        prop_assert_eq!(emitted[1].as_str(), messages::BACK_TO_MENU);
        prop_assert!(bot.session().mode().is_idle());
        prop_assert!(bot.session().answers().is_empty());
    }

    #[test]
    fn non_numeric_fertilizer_value_yields_single_error(
        position in prop::sample::select(vec![0usize, 1, 2, 5, 6, 7]),
        garbage in "[a-zA-Z][a-zA-Z ]{0,10}",
    ) {
        let mut bot = bot();
        let mut script: Vec<String> = ["2", "26", "75", "40", "Loamy", "Wheat", "50", "30", "40"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        script[position + 1] = garbage;
        let refs: Vec<&str> = script.iter().map(String::as_str).collect();

        let emitted = last_step_messages(&mut bot, &refs);

        prop_assert_eq!(emitted.len(), 2);
        prop_assert!(emitted[0].starts_with("❌ Error during fertilizer recommendation:"));
        prop_assert!(emitted[0].contains(FERTILIZER_FIELDS[position]));
        prop_assert_eq!(emitted[1].as_str(), messages::BACK_TO_MENU);
        prop_assert!(bot.session().mode().is_idle());
    }

    #[test]
    fn unseen_soil_type_is_reported_not_defaulted(soil in "[A-Z][a-z]{3,9}") {
        prop_assume!(!["Black", "Loamy", "Sandy"].contains(&soil.as_str()));
        let mut bot = bot();

        let emitted = last_step_messages(
            &mut bot,
            &["2", "26", "75", "40", soil.as_str(), "Wheat", "50", "30", "40"],
        );

        prop_assert_eq!(emitted.len(), 2);
        prop_assert!(emitted[0].contains("previously unseen label"));
        prop_assert!(emitted[0].contains(&soil));
    }

    #[test]
    fn one_from_idle_always_starts_a_fresh_crop_questionnaire(
        history in proptest::collection::vec("[0-9a-z.]{1,4}", 0..20),
    ) {
        let mut bot = bot();
        for input in &history {
            bot.process_input(input);
        }
        // Drain whatever questionnaire the history left open.
        while !bot.session().mode().is_idle() {
            bot.process_input("0");
        }

        bot.process_input("1");

        prop_assert_eq!(bot.session().mode(), DialogueMode::CollectingCrop);
        prop_assert_eq!(bot.session().cursor(), 0);
        prop_assert!(bot.session().answers().is_empty());
    }
}
