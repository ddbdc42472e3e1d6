//!
//! The bytecode linker tests.
//!

use std::collections::BTreeSet;
use std::time::Duration;

use crate::artifact::bytecode::Bytecode;
use crate::artifact::bytecode::LinkedBytecode;
use crate::artifact::placeholder;
use crate::artifact::set::ArtifactSet;
use crate::artifact::Artifact;
use crate::context::Context;
use crate::deployer::deployed_contract::DeployedContract;
use crate::deployer::Deployer;
use crate::environment::confirmation::Confirmation;
use crate::environment::memory::MemoryEnvironment;
use crate::error::Error;
use crate::error::Result;
use crate::reporter::memory::MemoryReporter;
use crate::reporter::memory::Record;

use super::Linker;

fn context(environment: MemoryEnvironment) -> Context<MemoryEnvironment> {
    Context::new(
        environment,
        Confirmation::new(Duration::from_millis(1), Duration::from_millis(50)),
        Box::new(MemoryReporter::default()),
    )
    .expect("Always valid")
}

fn environment() -> MemoryEnvironment {
    MemoryEnvironment::new(vec![web3::types::Address::from_low_u64_be(0xde)])
}

///
/// Builds an artifact with the `prefix` byte followed by a `PUSH20` of every dependency.
///
fn artifact(identifier: &str, prefix: &str, dependencies: &[&str], declared: bool) -> Artifact {
    let mut object = prefix.to_owned();
    for dependency in dependencies.iter() {
        object.push_str("73");
        object.push_str(placeholder::hashed(dependency).as_str());
    }
    object.push_str("00");

    let libraries: BTreeSet<String> = if declared {
        dependencies
            .iter()
            .map(|dependency| dependency.to_string())
            .collect()
    } else {
        BTreeSet::new()
    };
    Artifact::new(
        identifier.to_owned(),
        serde_json::from_str("[]").expect("Always valid"),
        Bytecode::new(object),
        libraries,
    )
}

fn deploy_fn<'a>(
    deployer: &'a Deployer<'a, MemoryEnvironment>,
) -> impl FnMut(&Artifact, LinkedBytecode) -> Result<DeployedContract> + 'a {
    move |artifact: &Artifact, bytecode: LinkedBytecode| {
        deployer.deploy_linked(artifact.name(), &artifact.interface, bytecode)
    }
}

#[test]
fn complete_and_same_length() {
    let artifacts: ArtifactSet = vec![
        artifact("lib.sol:A", "aa", &[], true),
        artifact("lib.sol:B", "bb", &[], true),
        artifact("main.sol:C", "cc", &["lib.sol:A", "lib.sol:B", "lib.sol:A"], true),
    ]
    .into_iter()
    .collect();
    let contract = artifacts.get("main.sol:C").expect("Always valid");

    let context = context(environment());
    let deployer = Deployer::new(&context);
    let mut deploy = deploy_fn(&deployer);

    let mut linker = Linker::new(&artifacts);
    let linked = linker
        .link(
            contract.identifier.as_str(),
            &contract.bytecode,
            &["A".to_owned(), "B".to_owned()],
            &mut deploy,
        )
        .expect("Always valid");

    assert_eq!(linked.len() * 2, contract.bytecode.len());
    let constructions = context.environment().constructions();
    assert_eq!(constructions.len(), 2);

    let linked = linked.as_slice();
    assert_eq!(&linked[2..22], constructions[0].address.as_bytes());
    assert_eq!(&linked[23..43], constructions[1].address.as_bytes());
    assert_eq!(&linked[44..64], constructions[0].address.as_bytes());
    assert_eq!(linker.libraries().len(), 2);
}

#[test]
fn chained_order() {
    let artifacts: ArtifactSet = vec![
        artifact("lib.sol:A", "aa", &[], true),
        artifact("lib.sol:B", "bb", &["lib.sol:A"], true),
        artifact("main.sol:C", "cc", &["lib.sol:B"], true),
    ]
    .into_iter()
    .collect();
    let contract = artifacts.get("main.sol:C").expect("Always valid");

    let context = context(environment());
    let deployer = Deployer::new(&context);
    let mut deploy = deploy_fn(&deployer);

    let linked = Linker::new(&artifacts)
        .link(
            contract.identifier.as_str(),
            &contract.bytecode,
            &["lib.sol:B".to_owned()],
            &mut deploy,
        )
        .expect("Always valid");

    let constructions = context.environment().constructions();
    assert_eq!(constructions.len(), 2);
    assert_eq!(constructions[0].code[0], 0xaa);
    assert_eq!(constructions[1].code[0], 0xbb);
    assert_eq!(&constructions[1].code[2..22], constructions[0].address.as_bytes());
    assert_eq!(&linked.as_slice()[2..22], constructions[1].address.as_bytes());
}

#[test]
fn undeclared_transitive_placeholders() {
    let artifacts: ArtifactSet = vec![
        artifact("lib.sol:A", "aa", &[], true),
        artifact("lib.sol:B", "bb", &["lib.sol:A"], false),
        artifact("main.sol:C", "cc", &["lib.sol:B"], true),
    ]
    .into_iter()
    .collect();
    let contract = artifacts.get("main.sol:C").expect("Always valid");

    let context = context(environment());
    let deployer = Deployer::new(&context);
    let mut deploy = deploy_fn(&deployer);

    Linker::new(&artifacts)
        .link(
            contract.identifier.as_str(),
            &contract.bytecode,
            &["B".to_owned()],
            &mut deploy,
        )
        .expect("Always valid");
    assert_eq!(context.environment().constructions().len(), 2);
}

#[test]
fn shared_library_deployed_once() {
    let artifacts: ArtifactSet = vec![
        artifact("lib.sol:A", "aa", &[], true),
        artifact("lib.sol:B", "bb", &["lib.sol:A"], true),
        artifact("lib.sol:D", "dd", &["lib.sol:A"], true),
        artifact("main.sol:C", "cc", &["lib.sol:B", "lib.sol:D"], true),
    ]
    .into_iter()
    .collect();
    let contract = artifacts.get("main.sol:C").expect("Always valid");

    let context = context(environment());
    let deployer = Deployer::new(&context);
    let mut deploy = deploy_fn(&deployer);

    Linker::new(&artifacts)
        .link(
            contract.identifier.as_str(),
            &contract.bytecode,
            &["B".to_owned(), "D".to_owned()],
            &mut deploy,
        )
        .expect("Always valid");

    let prefixes: Vec<u8> = context
        .environment()
        .constructions()
        .iter()
        .map(|construction| construction.code[0])
        .collect();
    assert_eq!(prefixes, vec![0xaa, 0xbb, 0xdd]);
}

#[test]
fn circular_dependency() {
    let artifacts: ArtifactSet = vec![
        artifact("lib.sol:A", "aa", &["lib.sol:B"], true),
        artifact("lib.sol:B", "bb", &["lib.sol:A"], true),
        artifact("main.sol:C", "cc", &["lib.sol:A"], true),
    ]
    .into_iter()
    .collect();
    let contract = artifacts.get("main.sol:C").expect("Always valid");

    let context = context(environment());
    let deployer = Deployer::new(&context);
    let mut deploy = deploy_fn(&deployer);

    match Linker::new(&artifacts).link(
        contract.identifier.as_str(),
        &contract.bytecode,
        &["A".to_owned()],
        &mut deploy,
    ) {
        Err(Error::LinkResolution { unresolved, .. }) => {
            assert_eq!(unresolved, vec!["lib.sol:A", "lib.sol:B", "lib.sol:A"]);
        }
        result => panic!("Unexpected result: {result:?}"),
    }
    assert!(context.environment().constructions().is_empty());
}

#[test]
fn self_dependency() {
    let artifacts: ArtifactSet = vec![artifact("lib.sol:A", "aa", &["lib.sol:A"], true)]
        .into_iter()
        .collect();
    let library = artifacts.get("lib.sol:A").expect("Always valid");

    let context = context(environment());
    let deployer = Deployer::new(&context);
    let mut deploy = deploy_fn(&deployer);

    assert!(matches!(
        Linker::new(&artifacts).link(
            library.identifier.as_str(),
            &library.bytecode,
            &["lib.sol:A".to_owned()],
            &mut deploy,
        ),
        Err(Error::LinkResolution { .. })
    ));
}

#[test]
fn unlisted_library_unresolved() {
    let artifacts: ArtifactSet = vec![
        artifact("lib.sol:A", "aa", &[], true),
        artifact("lib.sol:B", "bb", &[], true),
        artifact("main.sol:C", "cc", &["lib.sol:A", "lib.sol:B"], true),
    ]
    .into_iter()
    .collect();
    let contract = artifacts.get("main.sol:C").expect("Always valid");

    let context = context(environment());
    let deployer = Deployer::new(&context);
    let mut deploy = deploy_fn(&deployer);

    match Linker::new(&artifacts).link(
        contract.identifier.as_str(),
        &contract.bytecode,
        &["A".to_owned()],
        &mut deploy,
    ) {
        Err(Error::LinkResolution {
            contract,
            unresolved,
        }) => {
            assert_eq!(contract, "main.sol:C");
            assert_eq!(unresolved, vec!["lib.sol:B"]);
        }
        result => panic!("Unexpected result: {result:?}"),
    }
}

#[test]
fn unknown_placeholder_reported_raw() {
    let artifacts: ArtifactSet = vec![artifact("main.sol:C", "cc", &["gone.sol:X"], false)]
        .into_iter()
        .collect();
    let contract = artifacts.get("main.sol:C").expect("Always valid");

    let context = context(environment());
    let deployer = Deployer::new(&context);
    let mut deploy = deploy_fn(&deployer);

    match Linker::new(&artifacts).link(
        contract.identifier.as_str(),
        &contract.bytecode,
        &[],
        &mut deploy,
    ) {
        Err(Error::LinkResolution { unresolved, .. }) => {
            assert_eq!(unresolved, vec![placeholder::hashed("gone.sol:X")]);
        }
        result => panic!("Unexpected result: {result:?}"),
    }
}

#[test]
fn missing_library() {
    let artifacts: ArtifactSet = vec![artifact("main.sol:C", "cc", &["lib.sol:A"], true)]
        .into_iter()
        .collect();
    let contract = artifacts.get("main.sol:C").expect("Always valid");

    let context = context(environment());
    let deployer = Deployer::new(&context);
    let mut deploy = deploy_fn(&deployer);

    assert!(matches!(
        Linker::new(&artifacts).link(
            contract.identifier.as_str(),
            &contract.bytecode,
            &["lib.sol:A".to_owned()],
            &mut deploy,
        ),
        Err(Error::NotFound { name }) if name == "lib.sol:A"
    ));
}

#[test]
fn failed_deployment_stops_linking() {
    let artifacts: ArtifactSet = vec![
        artifact("lib.sol:A", "aa", &[], true),
        artifact("lib.sol:B", "bb", &[], true),
        artifact("lib.sol:D", "dd", &[], true),
        artifact("main.sol:C", "cc", &["lib.sol:A", "lib.sol:B", "lib.sol:D"], true),
    ]
    .into_iter()
    .collect();
    let contract = artifacts.get("main.sol:C").expect("Always valid");

    let context = context(environment().reject_construction(1));
    let deployer = Deployer::new(&context);
    let mut deploy = deploy_fn(&deployer);

    assert!(matches!(
        Linker::new(&artifacts).link(
            contract.identifier.as_str(),
            &contract.bytecode,
            &["A".to_owned(), "B".to_owned(), "D".to_owned()],
            &mut deploy,
        ),
        Err(Error::Deployment { name, .. }) if name == "B"
    ));
    assert_eq!(context.environment().constructions().len(), 1);
}

#[test]
fn substitutions_reported() {
    let artifacts: ArtifactSet = vec![
        artifact("lib.sol:A", "aa", &[], true),
        artifact("main.sol:C", "cc", &["lib.sol:A"], true),
    ]
    .into_iter()
    .collect();
    let contract = artifacts.get("main.sol:C").expect("Always valid");

    let context = context(environment());
    let deployer = Deployer::new(&context);
    let mut deploy = deploy_fn(&deployer);
    let reporter = MemoryReporter::default();

    Linker::new(&artifacts)
        .with_reporter(&reporter)
        .link(
            contract.identifier.as_str(),
            &contract.bytecode,
            &["A".to_owned()],
            &mut deploy,
        )
        .expect("Always valid");

    let address = context.environment().constructions()[0].address;
    assert_eq!(
        reporter.records(),
        vec![Record::LibraryLinked {
            contract: "main.sol:C".to_owned(),
            library: "lib.sol:A".to_owned(),
            address,
        }]
    );
}

#[test]
fn declared_identifier_shared_suffix() {
    let artifacts: ArtifactSet = vec![
        artifact("lib.sol:A", "aa", &[], true),
        artifact("vendor/lib.sol:A", "ab", &[], true),
        artifact("main.sol:C", "cc", &["lib.sol:A"], true),
    ]
    .into_iter()
    .collect();
    let contract = artifacts.get("main.sol:C").expect("Always valid");

    let context = context(environment());
    let deployer = Deployer::new(&context);
    let mut deploy = deploy_fn(&deployer);

    let mut linker = Linker::new(&artifacts);
    let linked = linker
        .link(
            contract.identifier.as_str(),
            &contract.bytecode,
            &artifacts.dependencies(contract),
            &mut deploy,
        )
        .expect("Always valid");

    let constructions = context.environment().constructions();
    assert_eq!(constructions.len(), 1);
    assert_eq!(constructions[0].code[0], 0xaa);
    assert_eq!(&linked.as_slice()[2..22], constructions[0].address.as_bytes());
    assert!(linker.libraries().contains_key("lib.sol:A"));
}
