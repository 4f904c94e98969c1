//! Build a small corpus and print recommendations for an existing member
//! and for a brand-new profile.
//!
//! Run with: `cargo run --example friend_circle`

use amistad::prelude::*;

fn main() -> Result<()> {
    let corpus = Corpus::new(vec![
        Profile::new(101, "Asha", Gender::Female, "Delhi", 25, ["chess", "painting"]),
        Profile::new(102, "Bina", Gender::Female, "Delhi", 26, ["chess", "cooking"]),
        Profile::new(103, "Chirag", Gender::Male, "Mumbai", 40, ["cooking", "cricket"]),
        Profile::new(104, "Deepa", Gender::Female, "Mumbai", 41, ["cooking"]),
        Profile::new(105, "Esha", Gender::Others, "Delhi", 25, ["painting", "chess"]),
    ]);

    let recommender = FriendRecommender::build(corpus, TagVectorizer::new())?;

    println!("Friends for Asha:");
    for r in recommender.recommend_for_existing("Asha", DEFAULT_K)? {
        println!("  {} (id {}, score {:.3})", r.name, r.id, r.score);
    }

    let noor = QueryProfile::new("Noor", "Female", "Delhi", "27", "chess, hiking");
    println!("Friends for Noor (new profile):");
    for r in recommender.recommend(&Query::New(noor), DEFAULT_K)? {
        println!("  {} (id {}, score {:.3})", r.name, r.id, r.score);
    }

    Ok(())
}
