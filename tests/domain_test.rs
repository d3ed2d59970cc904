use habla::domain::{
    EvaluationResult, Judgment, JudgmentError, RatingLevel, Transcript, TranscriptionJobStatus,
};

mod rating_level {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn given_known_characters_when_parsing_then_maps_to_levels() {
        assert_eq!(RatingLevel::from_str("高").unwrap(), RatingLevel::High);
        assert_eq!(RatingLevel::from_str("中").unwrap(), RatingLevel::Medium);
        assert_eq!(RatingLevel::from_str("低").unwrap(), RatingLevel::Low);
    }

    #[test]
    fn given_any_other_string_when_parsing_then_rejects() {
        assert!(RatingLevel::from_str("high").is_err());
        assert!(RatingLevel::from_str("优").is_err());
        assert!(RatingLevel::from_str("").is_err());
    }

    #[test]
    fn given_level_when_serializing_then_emits_wire_character() {
        assert_eq!(serde_json::to_string(&RatingLevel::High).unwrap(), "\"高\"");
        assert_eq!(serde_json::to_string(&RatingLevel::Low).unwrap(), "\"低\"");
    }

    #[test]
    fn given_unknown_wire_value_when_deserializing_then_fails() {
        assert!(serde_json::from_str::<RatingLevel>("\"优\"").is_err());
    }
}

mod transcript {
    use super::*;

    #[test]
    fn given_surrounding_whitespace_when_constructing_then_trims() {
        assert_eq!(Transcript::new("  Hola soy Ana \n").as_str(), "Hola soy Ana");
    }

    #[test]
    fn given_silence_when_constructing_then_empty_is_a_valid_value() {
        let t = Transcript::new("   ");
        assert!(t.is_empty());
        assert_eq!(t.as_str(), "");
    }
}

mod job_status {
    use super::*;

    #[test]
    fn given_provider_statuses_when_mapping_then_follows_lifecycle() {
        assert_eq!(
            TranscriptionJobStatus::from_provider_status("queued").unwrap(),
            TranscriptionJobStatus::Submitted
        );
        assert_eq!(
            TranscriptionJobStatus::from_provider_status("processing").unwrap(),
            TranscriptionJobStatus::Polling
        );
        assert_eq!(
            TranscriptionJobStatus::from_provider_status("completed").unwrap(),
            TranscriptionJobStatus::Completed
        );
        assert_eq!(
            TranscriptionJobStatus::from_provider_status("error").unwrap(),
            TranscriptionJobStatus::Error
        );
    }

    #[test]
    fn given_unknown_provider_status_when_mapping_then_rejects() {
        assert!(TranscriptionJobStatus::from_provider_status("exploded").is_err());
    }

    #[test]
    fn only_completed_error_and_timed_out_are_terminal() {
        assert!(!TranscriptionJobStatus::Submitted.is_terminal());
        assert!(!TranscriptionJobStatus::Polling.is_terminal());
        assert!(TranscriptionJobStatus::Completed.is_terminal());
        assert!(TranscriptionJobStatus::Error.is_terminal());
        assert!(TranscriptionJobStatus::TimedOut.is_terminal());
    }
}

mod judgment {
    use super::*;

    fn three_suggestions() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[test]
    fn given_full_contract_when_constructing_then_succeeds() {
        let judgment = Judgment::new(
            88,
            "中",
            "高",
            "高",
            vec![],
            vec![],
            three_suggestions(),
        )
        .unwrap();

        assert_eq!(judgment.overall_score, 88);
        assert_eq!(judgment.accuracy, RatingLevel::Medium);
        assert_eq!(judgment.fluency, RatingLevel::High);
        assert_eq!(judgment.integrity, RatingLevel::High);
    }

    #[test]
    fn given_score_out_of_range_when_constructing_then_rejects() {
        let err = Judgment::new(101, "高", "高", "高", vec![], vec![], three_suggestions())
            .unwrap_err();
        assert!(matches!(err, JudgmentError::ScoreOutOfRange(101)));

        let err = Judgment::new(-1, "高", "高", "高", vec![], vec![], three_suggestions())
            .unwrap_err();
        assert!(matches!(err, JudgmentError::ScoreOutOfRange(-1)));
    }

    #[test]
    fn given_wrong_suggestion_count_when_constructing_then_rejects() {
        let err = Judgment::new(
            88,
            "高",
            "高",
            "高",
            vec![],
            vec![],
            vec!["only one".to_string()],
        )
        .unwrap_err();
        assert!(matches!(err, JudgmentError::WrongSuggestionCount(1)));
    }

    #[test]
    fn given_unknown_rating_when_constructing_then_rejects_and_names_field() {
        let err = Judgment::new(88, "好", "高", "高", vec![], vec![], three_suggestions())
            .unwrap_err();
        assert!(matches!(
            err,
            JudgmentError::InvalidRating {
                field: "accuracy",
                ..
            }
        ));
    }
}

mod evaluation_result {
    use super::*;

    #[test]
    fn given_judgment_when_merging_then_carries_request_identifiers_unchanged() {
        let judgment = Judgment::new(
            88,
            "中",
            "高",
            "高",
            vec![],
            vec![],
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        )
        .unwrap();

        let result = EvaluationResult::merge(
            judgment,
            "s1".to_string(),
            "Hola soy Ana".to_string(),
        );

        assert_eq!(result.sentence_id, "s1");
        assert_eq!(result.user_text, "Hola soy Ana");
        assert_eq!(result.overall_score, 88);

        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sentence_id"], "s1");
        assert_eq!(json["accuracy"], "中");
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 3);
    }
}
