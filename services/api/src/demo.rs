use crate::infra::load_catalog_store;
use chrono::Utc;
use clap::Args;
use moodmeal::assessment::{
    PostSamplingPolicy, SessionController, SuggestionEngine,
};
use moodmeal::catalog::Question;
use moodmeal::config::CatalogConfig;
use moodmeal::error::AppError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Directory with catalog JSON assets (defaults to the built-in catalog)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Seed for the question draws (random when omitted)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Likert answer applied to every pre-test question (clamped to 1-5)
    #[arg(long, default_value_t = 5)]
    pub(crate) pre_answer: i32,
    /// Likert answer applied to every post-test question (clamped to 1-5)
    #[arg(long, default_value_t = 4)]
    pub(crate) post_answer: i32,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        data_dir,
        seed,
        pre_answer,
        post_answer,
    } = args;

    let config = CatalogConfig { data_dir };
    let store = load_catalog_store(&config);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut controller = SessionController::new(
        &store,
        SuggestionEngine::default(),
        PostSamplingPolicy::PreferUnseen,
    );

    println!("MoodMeal assessment demo");
    println!();

    let pre_questions = controller.begin_pre_test(&mut rng)?.to_vec();
    println!("Pre-test ({} questions):", pre_questions.len());
    render_questions(&pre_questions, pre_answer);
    for index in 0..pre_questions.len() {
        controller.set_pre_answer(index, pre_answer)?;
    }

    let suggestion = *controller.reveal_suggestion()?;
    let scores = controller.pre_scores().copied().unwrap_or_default();
    println!();
    println!("Pre-test scores:");
    println!(
        "  valence {:.2} | arousal {:.2} | stress {:.2} | craving {:.2} | bodysense {:.2}",
        scores.valence, scores.arousal, scores.stress, scores.craving, scores.bodysense
    );
    println!();
    println!("Suggestion — {}:", suggestion.rule.label());
    match suggestion.recipe {
        Some(recipe) => println!(
            "  cook: {} (~{} kcal, {} min)",
            recipe.name, recipe.nutrition.kcal_est, recipe.time_min
        ),
        None => println!("  cook: no recipe available"),
    }
    match suggestion.market {
        Some(item) => println!("  buy: {} (~{} kcal)", item.name, item.kcal_per_portion),
        None => println!("  buy: no market item available"),
    }
    match suggestion.restaurant {
        Some(item) => println!(
            "  eat out: {} ({}, ~{} kcal)",
            item.name, item.cuisine, item.nutrition.kcal_est
        ),
        None => println!("  eat out: no restaurant item available"),
    }

    let post_questions = controller.begin_post_test(&mut rng)?.to_vec();
    println!();
    println!("Post-test ({} questions):", post_questions.len());
    render_questions(&post_questions, post_answer);
    for index in 0..post_questions.len() {
        controller.set_post_answer(index, post_answer)?;
    }

    let uplift = controller.finalize(Utc::now())?.uplift;
    println!();
    println!("Mood uplift score: {uplift:+.2}");
    println!("Sessions in history: {}", controller.history().len());

    Ok(())
}

fn render_questions(questions: &[Question], answer: i32) {
    for question in questions {
        println!(
            "  [{}] {} -> {}",
            question.dim.label(),
            question.text,
            answer.clamp(1, 5)
        );
    }
}
