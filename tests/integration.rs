//! End-to-end flow: corpus in, ranked recommendations out.

use amistad::prelude::*;

fn india_corpus() -> Corpus {
    Corpus::new(vec![
        Profile::new(101, "Asha", Gender::Female, "Delhi", 25, ["chess", "painting"]),
        Profile::new(102, "Bina", Gender::Female, "Delhi", 26, ["chess", "cooking"]),
        Profile::new(103, "Chirag", Gender::Male, "Mumbai", 40, ["cooking", "cricket"]),
        Profile::new(104, "Deepa", Gender::Female, "Mumbai", 41, ["cooking"]),
        Profile::new(105, "Esha", Gender::Others, "Delhi", 25, ["painting", "chess"]),
        Profile::new(106, "Farhan", Gender::Male, "Delhi", 27, ["cricket", "chess"]),
    ])
}

#[test]
fn session_serves_existing_member_queries() {
    let recommender = FriendRecommender::build(india_corpus(), TagVectorizer::new()).unwrap();

    let results = recommender.recommend_for_existing("Asha", DEFAULT_K).unwrap();
    assert!(results.len() <= DEFAULT_K);
    assert!(!results.is_empty());

    // Never herself.
    assert!(results.iter().all(|r| r.id != 101));

    // Non-increasing scores, all within [0, 1].
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.score)));

    // Esha shares Delhi, 25, painting, and chess with Asha; nobody beats that.
    assert_eq!(results[0].id, 105);
}

#[test]
fn session_serves_new_profile_queries() {
    let recommender = FriendRecommender::build(india_corpus(), TagVectorizer::new()).unwrap();

    let query = QueryProfile::new("Noor", "Female", "Mumbai", "41", "cooking");
    let results = recommender.recommend(&Query::New(query), 3).unwrap();

    assert_eq!(results.len(), 3);
    // Deepa is Female/Mumbai/41/cooking — a perfect term match.
    assert_eq!(results[0].id, 104);
    assert_eq!(results[0].score, 1.0);
}

#[test]
fn unseen_interest_terms_never_abort_a_query() {
    let recommender = FriendRecommender::build(india_corpus(), TagVectorizer::new()).unwrap();

    let query = QueryProfile::new("Noor", "Female", "Delhi", "25", "chess, kitesurfing");
    let results = recommender.recommend(&Query::New(query), DEFAULT_K).unwrap();
    assert!(results.len() <= DEFAULT_K);
    assert!(!results.is_empty());
}

#[test]
fn error_signals_are_distinguishable() {
    let recommender = FriendRecommender::build(india_corpus(), TagVectorizer::new()).unwrap();

    let not_found = recommender
        .recommend(&Query::Existing { name: "Zoya".into() }, 5)
        .unwrap_err();
    assert!(matches!(not_found, AmistadError::NotFound { .. }));

    let invalid = recommender
        .recommend(
            &Query::New(QueryProfile::new("Noor", "Female", "Delhi", "??", "chess")),
            5,
        )
        .unwrap_err();
    assert!(matches!(invalid, AmistadError::Validation { .. }));

    let empty = FriendRecommender::build(Corpus::new(Vec::new()), TagVectorizer::new()).unwrap_err();
    assert!(matches!(empty, AmistadError::EmptyCorpus { .. }));
}

#[test]
fn repeated_sessions_are_bit_identical() {
    let build = || FriendRecommender::build(india_corpus(), TagVectorizer::new()).unwrap();
    let first = build();
    let second = build();

    assert_eq!(first.vocabulary(), second.vocabulary());
    assert_eq!(first.vectors(), second.vectors());
    assert_eq!(first.similarity_matrix(), second.similarity_matrix());

    for name in ["Asha", "Bina", "Chirag", "Deepa", "Esha", "Farhan"] {
        assert_eq!(
            first.recommend_for_existing(name, DEFAULT_K).unwrap(),
            second.recommend_for_existing(name, DEFAULT_K).unwrap()
        );
    }
}

#[test]
fn custom_session_configuration() {
    let vectorizer = TagVectorizer::new()
        .with_max_terms(4)
        .with_stop_words(StopWordsFilter::new(["delhi", "mumbai"]));
    let recommender = FriendRecommender::build(india_corpus(), vectorizer).unwrap();

    // The cap and the custom stop words both took effect.
    assert_eq!(recommender.vocabulary().len(), 4);
    assert!(!recommender.vocabulary().contains("delhi"));

    let results = recommender.recommend_for_existing("Asha", 2).unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn results_serialize_for_the_presentation_layer() {
    let recommender = FriendRecommender::build(india_corpus(), TagVectorizer::new()).unwrap();
    let results = recommender.recommend_for_existing("Asha", 2).unwrap();

    let json = serde_json::to_string(&results).unwrap();
    let round_trip: Vec<Recommendation> = serde_json::from_str(&json).unwrap();
    assert_eq!(results, round_trip);
    assert!(json.contains("\"id\""));
    assert!(json.contains("\"score\""));
}
