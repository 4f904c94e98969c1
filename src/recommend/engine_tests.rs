use super::*;
use crate::profile::{Gender, Profile};

fn small_corpus() -> Corpus {
    Corpus::new(vec![
        Profile::new(1, "A", Gender::Male, "Delhi", 25, ["chess"]),
        Profile::new(2, "B", Gender::Male, "Delhi", 26, ["chess"]),
        Profile::new(3, "C", Gender::Female, "Mumbai", 40, ["cooking"]),
    ])
}

fn build(corpus: Corpus) -> FriendRecommender {
    FriendRecommender::build(corpus, TagVectorizer::new()).expect("corpus should build")
}

#[test]
fn worked_example_ranks_shared_tokens_first() {
    let recommender = build(small_corpus());
    let results = recommender.recommend_for_existing("A", 2).unwrap();

    assert_eq!(results.len(), 2);
    // B shares Male/Delhi/chess with A; C shares nothing.
    assert_eq!(results[0].id, 2);
    assert_eq!(results[1].id, 3);
    assert!(results[0].score > results[1].score);
    assert_eq!(results[1].score, 0.0);
}

#[test]
fn existing_member_never_recommends_itself() {
    let recommender = build(small_corpus());
    for name in ["A", "B", "C"] {
        let row = recommender.corpus().find_by_name(name).unwrap();
        let own_id = recommender.corpus().get(row).unwrap().id;
        let results = recommender.recommend_for_existing(name, 10).unwrap();
        assert!(results.iter().all(|r| r.id != own_id));
    }
}

#[test]
fn unknown_name_is_not_found() {
    let recommender = build(small_corpus());
    let err = recommender.recommend_for_existing("Nobody", 5).unwrap_err();
    assert!(matches!(err, AmistadError::NotFound { .. }));
}

#[test]
fn zero_k_is_a_validation_error() {
    let recommender = build(small_corpus());
    let existing = recommender.recommend_for_existing("A", 0).unwrap_err();
    assert!(matches!(existing, AmistadError::Validation { .. }));

    let query = QueryProfile::new("Noor", "Female", "Delhi", "25", "chess");
    let fresh = recommender.recommend_for_new(&query, 0).unwrap_err();
    assert!(matches!(fresh, AmistadError::Validation { .. }));
}

#[test]
fn single_profile_corpus_yields_not_found_after_exclusion() {
    let corpus = Corpus::new(vec![Profile::new(
        1,
        "Solo",
        Gender::Others,
        "Delhi",
        30,
        ["chess"],
    )]);
    let recommender = build(corpus);
    let err = recommender.recommend_for_existing("Solo", 5).unwrap_err();
    assert!(matches!(err, AmistadError::NotFound { .. }));
}

#[test]
fn empty_corpus_fails_to_build() {
    let err = FriendRecommender::build(Corpus::new(Vec::new()), TagVectorizer::new()).unwrap_err();
    assert!(matches!(err, AmistadError::EmptyCorpus { .. }));
}

#[test]
fn corpus_profile_without_interests_fails_to_build() {
    let corpus = Corpus::new(vec![Profile::new(
        1,
        "Raj",
        Gender::Male,
        "Delhi",
        30,
        Vec::<String>::new(),
    )]);
    let err = FriendRecommender::build(corpus, TagVectorizer::new()).unwrap_err();
    assert!(matches!(err, AmistadError::Validation { .. }));
}

#[test]
fn new_profile_query_scores_against_whole_corpus() {
    let recommender = build(small_corpus());
    let query = QueryProfile::new("Noor", "Female", "Mumbai", "40", "cooking");
    let results = recommender.recommend_for_new(&query, 3).unwrap();

    // All three members are eligible; the cooking/Mumbai/Female profile wins.
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].id, 3);
}

#[test]
fn new_profile_with_unseen_interests_still_gets_results() {
    let recommender = build(small_corpus());
    let query = QueryProfile::new("Noor", "Female", "Delhi", "25", "skydiving, basejumping");
    let results = recommender.recommend_for_new(&query, 2).unwrap();

    // "delhi" and "female" still match; the unseen interests weigh zero.
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.score)));
}

#[test]
fn fully_disjoint_new_profile_returns_zero_scores() {
    let recommender = build(small_corpus());
    let query = QueryProfile::new("Noor", "Agender", "Reykjavik", "99", "glaciology");
    let results = recommender.recommend_for_new(&query, 2).unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.score == 0.0));
    // Zero-score ties keep corpus row order.
    assert_eq!(results[0].id, 1);
    assert_eq!(results[1].id, 2);
}

#[test]
fn malformed_new_profile_is_a_validation_error() {
    let recommender = build(small_corpus());

    let bad_age = QueryProfile::new("Noor", "Female", "Delhi", "soon", "chess");
    assert!(matches!(
        recommender.recommend_for_new(&bad_age, 5).unwrap_err(),
        AmistadError::Validation { .. }
    ));

    let no_interests = QueryProfile::new("Noor", "Female", "Delhi", "25", " , ");
    assert!(matches!(
        recommender.recommend_for_new(&no_interests, 5).unwrap_err(),
        AmistadError::Validation { .. }
    ));
}

#[test]
fn query_enum_dispatches_to_both_variants() {
    let recommender = build(small_corpus());

    let existing = recommender
        .recommend(&Query::Existing { name: "A".into() }, 2)
        .unwrap();
    assert_eq!(existing, recommender.recommend_for_existing("A", 2).unwrap());

    let profile = QueryProfile::new("Noor", "Female", "Mumbai", "40", "cooking");
    let fresh = recommender.recommend(&Query::New(profile.clone()), 2).unwrap();
    assert_eq!(fresh, recommender.recommend_for_new(&profile, 2).unwrap());
}

#[test]
fn duplicate_names_resolve_to_first_row() {
    let corpus = Corpus::new(vec![
        Profile::new(1, "Asha", Gender::Female, "Delhi", 25, ["chess"]),
        Profile::new(2, "Asha", Gender::Female, "Delhi", 25, ["chess"]),
        Profile::new(3, "Bina", Gender::Female, "Delhi", 26, ["chess"]),
    ]);
    let recommender = build(corpus);
    let results = recommender.recommend_for_existing("Asha", 5).unwrap();

    // Row 0 is the query; rows 1 and 2 are candidates, id 2 included.
    assert_eq!(results.len(), 2);
    assert!(results.iter().any(|r| r.id == 2));
    assert!(results.iter().all(|r| r.id != 1));
}

#[test]
fn truncates_to_k() {
    let corpus = Corpus::new(vec![
        Profile::new(1, "A", Gender::Male, "Delhi", 25, ["chess"]),
        Profile::new(2, "B", Gender::Male, "Delhi", 25, ["chess"]),
        Profile::new(3, "C", Gender::Male, "Delhi", 25, ["chess"]),
        Profile::new(4, "D", Gender::Male, "Delhi", 25, ["chess"]),
    ]);
    let recommender = build(corpus);
    let results = recommender.recommend_for_existing("A", 2).unwrap();
    assert_eq!(results.len(), 2);
    // Perfect ties order by corpus row.
    assert_eq!(results[0].id, 2);
    assert_eq!(results[1].id, 3);
}

#[test]
fn on_demand_build_matches_precomputed_results() {
    let precomputed = build(small_corpus());
    let on_demand =
        FriendRecommender::build_on_demand(small_corpus(), TagVectorizer::new()).unwrap();

    assert!(precomputed.similarity_matrix().is_some());
    assert!(on_demand.similarity_matrix().is_none());

    for name in ["A", "B", "C"] {
        assert_eq!(
            precomputed.recommend_for_existing(name, 3).unwrap(),
            on_demand.recommend_for_existing(name, 3).unwrap()
        );
    }
}

#[test]
fn results_are_deterministic_across_sessions() {
    let first = build(small_corpus()).recommend_for_existing("A", 3).unwrap();
    let second = build(small_corpus()).recommend_for_existing("A", 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn default_k_is_five() {
    assert_eq!(DEFAULT_K, 5);
}
