//! Inference scenarios with hand-checked posteriors.
//!
//! Reference values were computed by brute force over the same model tables
//! and are compared to 1e-6.

use std::path::PathBuf;

use hd_common::GeneCount;
use hd_config::{ModelParams, ValidationError};
use hd_core::exit_codes::ExitCode;
use hd_core::inference::{
    for_each_world, infer, joint_probability, InferenceError, InferenceOptions, PersonPosterior,
    Posteriors,
};
use hd_core::pedigree::{load_pedigree, Pedigree, Person};

const TOL: f64 = 1e-6;

// ============================================================================
// Helpers
// ============================================================================

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn run(pedigree: &Pedigree) -> Posteriors {
    infer(pedigree, &ModelParams::default(), &InferenceOptions::default())
        .expect("inference")
        .posteriors
}

fn posterior<'a>(posteriors: &'a Posteriors, name: &str) -> &'a PersonPosterior {
    posteriors
        .get(name)
        .unwrap_or_else(|| panic!("no posterior for {name}"))
}

fn assert_gene(post: &PersonPosterior, two: f64, one: f64, zero: f64) {
    assert!((post.gene.two - two).abs() < TOL, "two: {} vs {two}", post.gene.two);
    assert!((post.gene.one - one).abs() < TOL, "one: {} vs {one}", post.gene.one);
    assert!((post.gene.zero - zero).abs() < TOL, "zero: {} vs {zero}", post.gene.zero);
}

fn assert_trait(post: &PersonPosterior, present: f64) {
    assert!(
        (post.trait_dist.present - present).abs() < TOL,
        "present: {} vs {present}",
        post.trait_dist.present
    );
    assert!((post.trait_dist.absent - (1.0 - present)).abs() < TOL);
}

// ============================================================================
// Single founders
// ============================================================================

#[test]
fn founder_without_evidence_recovers_prior() {
    let pedigree = Pedigree::builder().founder("Solo", None).build().unwrap();
    let posteriors = run(&pedigree);
    let solo = posterior(&posteriors, "Solo");

    assert_gene(solo, 0.01, 0.03, 0.96);
    // 0.96*0.01 + 0.03*0.56 + 0.01*0.65
    assert_trait(solo, 0.0329);
}

#[test]
fn founder_with_trait_follows_bayes_rule() {
    let pedigree = Pedigree::builder()
        .founder("Solo", Some(true))
        .build()
        .unwrap();
    let posteriors = run(&pedigree);
    let solo = posterior(&posteriors, "Solo");

    let evidence = 0.0329;
    assert_gene(
        solo,
        0.01 * 0.65 / evidence,
        0.03 * 0.56 / evidence,
        0.96 * 0.01 / evidence,
    );
    assert_trait(solo, 1.0);
}

#[test]
fn founder_without_trait_shifts_towards_zero_copies() {
    let pedigree = Pedigree::builder()
        .founder("Solo", Some(false))
        .build()
        .unwrap();
    let posteriors = run(&pedigree);
    let solo = posterior(&posteriors, "Solo");

    assert!(solo.gene.zero > 0.96);
    assert_eq!(solo.trait_dist.absent, 1.0);
    assert_eq!(solo.trait_dist.present, 0.0);
}

// ============================================================================
// Families
// ============================================================================

#[test]
fn trio_with_affected_child() {
    let pedigree = load_pedigree(&data_path("trio.csv")).unwrap();
    let posteriors = run(&pedigree);

    for parent in ["Mother", "Father"] {
        let post = posterior(&posteriors, parent);
        assert_gene(post, 0.117665, 0.187357, 0.694977);
        assert_trait(post, 0.188352);
    }
    let child = posterior(&posteriors, "Child");
    assert_gene(child, 0.016321, 0.787025, 0.196654);
    assert_trait(child, 1.0);
}

#[test]
fn three_person_family() {
    let pedigree = load_pedigree(&data_path("family0.csv")).unwrap();
    let posteriors = run(&pedigree);

    let harry = posterior(&posteriors, "Harry");
    assert_gene(harry, 0.009183, 0.455698, 0.535119);
    assert_trait(harry, 0.266511);

    let james = posterior(&posteriors, "James");
    assert_gene(james, 0.197568, 0.510638, 0.291793);
    assert_trait(james, 1.0);

    let lily = posterior(&posteriors, "Lily");
    assert_gene(lily, 0.003619, 0.013649, 0.982732);
    assert_trait(lily, 0.0);
}

#[test]
fn six_person_family() {
    let pedigree = load_pedigree(&data_path("family1.csv")).unwrap();
    let posteriors = run(&pedigree);
    assert_eq!(posteriors.len(), 6);

    let fred = posterior(&posteriors, "Fred");
    assert_trait(fred, 1.0);
    assert!((fred.gene.one - 0.6996).abs() < 5e-5);

    let arthur = posterior(&posteriors, "Arthur");
    assert_trait(arthur, 0.0);
    assert!((arthur.gene.zero - 0.8823).abs() < 5e-5);

    let molly = posterior(&posteriors, "Molly");
    assert_gene(molly, 0.078230, 0.195769, 0.726002);
    assert_trait(molly, 0.167740);

    // Unobserved siblings with identical parents are exchangeable.
    let ginny = posterior(&posteriors, "Ginny");
    let ron = posterior(&posteriors, "Ron");
    assert_gene(ginny, 0.004457, 0.255233, 0.740311);
    assert_trait(ginny, 0.153230);
    assert!((ginny.gene.one - ron.gene.one).abs() < 1e-12);
    assert!((ginny.trait_dist.present - ron.trait_dist.present).abs() < 1e-12);
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn every_distribution_sums_to_one() {
    for file in ["family0.csv", "family1.csv", "trio.csv"] {
        let pedigree = load_pedigree(&data_path(file)).unwrap();
        for (name, post) in run(&pedigree) {
            assert!((post.gene.sum() - 1.0).abs() < 1e-9, "{file}: {name} gene");
            assert!((post.trait_dist.sum() - 1.0).abs() < 1e-9, "{file}: {name} trait");
        }
    }
}

#[test]
fn observed_traits_are_certain() {
    let pedigree = load_pedigree(&data_path("family1.csv")).unwrap();
    let posteriors = run(&pedigree);
    for person in pedigree.people() {
        if let Some(observed) = person.observed_trait {
            let post = posterior(&posteriors, person.id.as_str());
            assert_eq!(post.trait_dist.get(observed), 1.0);
            assert_eq!(post.trait_dist.get(!observed), 0.0);
        }
    }
}

#[test]
fn result_does_not_depend_on_input_order() {
    let forward = Pedigree::new(vec![
        Person::child("Harry", "Lily", "James", None),
        Person::founder("James", Some(true)),
        Person::founder("Lily", Some(false)),
    ])
    .unwrap();
    let reversed = Pedigree::new(vec![
        Person::founder("Lily", Some(false)),
        Person::founder("James", Some(true)),
        Person::child("Harry", "Lily", "James", None),
    ])
    .unwrap();

    let a = run(&forward);
    let b = run(&reversed);
    for (name, post) in &a {
        let other = posterior(&b, name.as_str());
        for gene in GeneCount::ALL {
            assert!((post.gene.get(gene) - other.gene.get(gene)).abs() < 1e-12);
        }
        assert!((post.trait_dist.present - other.trait_dist.present).abs() < 1e-12);
    }
}

#[test]
fn joint_probability_matches_hand_computation() {
    let pedigree = load_pedigree(&data_path("family0.csv")).unwrap();
    let p = joint_probability(
        &pedigree,
        &ModelParams::default(),
        &["Harry"],
        &["James"],
        &["James"],
    )
    .unwrap();
    assert!((p - 0.0026643247488).abs() < 1e-12);
}

#[test]
fn enumeration_skips_worlds_contradicting_evidence() {
    let pedigree = load_pedigree(&data_path("family0.csv")).unwrap();
    let mut visited = 0u64;
    let stats = for_each_world(&pedigree, &InferenceOptions::default(), |world| {
        assert!(world.matches_evidence(&pedigree));
        visited += 1;
    })
    .unwrap();

    // Two of three traits observed: 2 hypotheses survive out of 8.
    assert_eq!(stats.trait_hypotheses, 8);
    assert_eq!(stats.pruned_by_evidence, 6);
    assert_eq!(stats.worlds_evaluated, 2 * 27);
    assert_eq!(visited, stats.worlds_evaluated);
}

#[test]
fn impossible_evidence_fails_normalization() {
    let mut model = ModelParams::default();
    model.trait_given_gene.zero = hd_config::TraitRow::new(0.0, 1.0);
    model.trait_given_gene.one = hd_config::TraitRow::new(0.0, 1.0);
    model.trait_given_gene.two = hd_config::TraitRow::new(0.0, 1.0);

    let pedigree = Pedigree::builder()
        .founder("Solo", Some(true))
        .build()
        .unwrap();
    let err = infer(&pedigree, &model, &InferenceOptions::default()).unwrap_err();
    assert!(matches!(err, InferenceError::Normalization { .. }));
}

#[test]
fn invalid_model_is_a_configuration_error() {
    let pedigree = load_pedigree(&data_path("trio.csv")).unwrap();

    let mut bad_prior = ModelParams::default();
    bad_prior.gene_prior.zero = 0.5;
    let err = infer(&pedigree, &bad_prior, &InferenceOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        InferenceError::InvalidModel(ValidationError::DistributionSum { .. })
    ));

    // An out-of-range mutation rate would otherwise surface as negative mass
    // during normalization.
    let mut bad_rate = ModelParams::default();
    bad_rate.mutation_rate = 1.7;
    let err = infer(&pedigree, &bad_rate, &InferenceOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        InferenceError::InvalidModel(ValidationError::OutOfRange { .. })
    ));

    let unified = hd_common::Error::from(err);
    assert!(unified.is_config());
    assert_eq!(ExitCode::from(&unified), ExitCode::ConfigError);
}

#[test]
fn oversized_pedigree_is_refused_before_enumeration() {
    let pedigree = load_pedigree(&data_path("family1.csv")).unwrap();
    let err = infer(
        &pedigree,
        &ModelParams::default(),
        &InferenceOptions::with_max_people(5),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        InferenceError::TooManyPeople { count: 6, limit: 5 }
    ));
}

#[test]
fn empty_pedigree_has_no_posteriors() {
    let pedigree = Pedigree::new(Vec::new()).unwrap();
    assert!(run(&pedigree).is_empty());
}
