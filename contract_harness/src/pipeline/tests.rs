//!
//! The compile-and-deploy pipeline tests.
//!

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use web3::ethabi::Token;

use crate::artifact::bytecode::Bytecode;
use crate::artifact::placeholder;
use crate::artifact::set::ArtifactSet;
use crate::artifact::Artifact;
use crate::compiler::settings::Settings as CompilerSettings;
use crate::compiler::Compiler;
use crate::context::Context;
use crate::environment::confirmation::Confirmation;
use crate::environment::memory::MemoryEnvironment;
use crate::error::Error;
use crate::error::Result;
use crate::reporter::memory::MemoryReporter;
use crate::reporter::memory::Record;

use super::Pipeline;

/// The `test()` selector.
const TEST_SELECTOR: [u8; 4] = [0xf8, 0xa8, 0xfd, 0x6d];

///
/// The compiler returning a fixed artifact set and recording its requests.
///
struct FixedCompiler {
    /// The artifacts to return.
    artifacts: ArtifactSet,
    /// The requested sources.
    requests: RefCell<Vec<Vec<PathBuf>>>,
}

impl FixedCompiler {
    fn new(artifacts: Vec<Artifact>) -> Self {
        Self {
            artifacts: artifacts.into_iter().collect(),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Compiler for FixedCompiler {
    fn compile(&self, sources: &[PathBuf], _settings: &CompilerSettings) -> Result<ArtifactSet> {
        self.requests.borrow_mut().push(sources.to_vec());
        Ok(self.artifacts.clone())
    }
}

///
/// The compiler failing with a diagnostic.
///
struct FailingCompiler;

impl Compiler for FailingCompiler {
    fn compile(&self, _sources: &[PathBuf], _settings: &CompilerSettings) -> Result<ArtifactSet> {
        Err(Error::Compilation {
            message: "ParserError: Expected ';' but got '}'".to_owned(),
        })
    }
}

fn context(environment: MemoryEnvironment) -> (Context<MemoryEnvironment>, MemoryReporter) {
    let reporter = MemoryReporter::default();
    let context = Context::new(
        environment,
        Confirmation::new(Duration::from_millis(1), Duration::from_millis(50)),
        Box::new(reporter.clone()),
    )
    .expect("Always valid");
    (context, reporter)
}

fn environment() -> MemoryEnvironment {
    MemoryEnvironment::new(vec![web3::types::Address::from_low_u64_be(0xde)])
}

fn request_storage() -> Artifact {
    Artifact::new(
        "contracts/RequestStorage.sol:RequestStorage".to_owned(),
        serde_json::from_value(serde_json::json!([{
            "type": "function",
            "name": "test",
            "inputs": [],
            "outputs": [{ "name": "", "type": "string", "internalType": "string" }],
            "stateMutability": "pure"
        }]))
        .expect("Always valid"),
        Bytecode::new("0x6080604052348015600f57600080fd5b50"),
        BTreeSet::new(),
    )
}

fn library(identifier: &str, prefix: &str, dependencies: &[&str]) -> Artifact {
    let mut object = prefix.to_owned();
    for dependency in dependencies.iter() {
        object.push_str("73");
        object.push_str(placeholder::hashed(dependency).as_str());
    }
    object.push_str("00");
    Artifact::new(
        identifier.to_owned(),
        serde_json::from_str("[]").expect("Always valid"),
        Bytecode::new(object),
        dependencies
            .iter()
            .map(|dependency| dependency.to_string())
            .collect(),
    )
}

///
/// ABI-encodes a single `string` output.
///
fn string_output(value: &str) -> Vec<u8> {
    web3::ethabi::encode(&[Token::String(value.to_owned())])
}

#[test]
fn request_storage_round_trip() {
    let output = string_output("request stored");
    let (context, reporter) =
        context(environment().with_call_result(TEST_SELECTOR.to_vec(), output.clone()));
    let compiler = FixedCompiler::new(vec![request_storage()]);
    let pipeline = Pipeline::new(compiler, &context, CompilerSettings::default());

    let instance = pipeline
        .compile_and_deploy(&["RequestStorage.sol".into()], "RequestStorage")
        .expect("Always valid");

    assert_eq!(
        instance.call_raw(&TEST_SELECTOR).expect("Always valid"),
        output
    );
    assert_eq!(
        instance.call("test", &[]).expect("Always valid"),
        vec![Token::String("request stored".to_owned())]
    );

    let constructions = context.environment().constructions();
    assert_eq!(constructions.len(), 1);
    assert_eq!(constructions[0].address, instance.address());
    assert_eq!(reporter.transaction_names(), vec!["RequestStorage"]);
    assert!(!reporter
        .records()
        .iter()
        .any(|record| matches!(record, Record::BytecodeSize { .. })));
}

#[test]
fn sources_passed_to_compiler() {
    let (context, _reporter) = context(environment());
    let compiler = FixedCompiler::new(vec![request_storage()]);
    let pipeline = Pipeline::new(compiler, &context, CompilerSettings::default());

    let sources: Vec<PathBuf> = vec!["contracts/RequestStorage.sol".into()];
    pipeline
        .compile_and_deploy(sources.as_slice(), "RequestStorage")
        .expect("Always valid");
    assert_eq!(pipeline.compiler.requests.borrow().as_slice(), &[sources]);
}

#[test]
fn linked_chain_deployed_in_order() {
    let (context, reporter) = context(environment());
    let compiler = FixedCompiler::new(vec![
        library("lib.sol:A", "aa", &[]),
        library("lib.sol:B", "bb", &["lib.sol:A"]),
        library("main.sol:C", "cc", &["lib.sol:B"]),
    ]);
    let pipeline = Pipeline::new(compiler, &context, CompilerSettings::default());

    let instance = pipeline
        .compile_and_deploy(&["main.sol".into()], "C")
        .expect("Always valid");

    let constructions = context.environment().constructions();
    let prefixes: Vec<u8> = constructions
        .iter()
        .map(|construction| construction.code[0])
        .collect();
    assert_eq!(prefixes, vec![0xaa, 0xbb, 0xcc]);
    assert_eq!(&constructions[2].code[2..22], constructions[1].address.as_bytes());
    assert_eq!(instance.address(), constructions[2].address);
    assert_eq!(reporter.transaction_names(), vec!["A", "B", "C"]);

    let sizes: Vec<(String, bool)> = reporter
        .records()
        .into_iter()
        .filter_map(|record| match record {
            Record::BytecodeSize {
                name, is_library, ..
            } => Some((name, is_library)),
            _ => None,
        })
        .collect();
    assert_eq!(
        sizes,
        vec![
            ("A".to_owned(), true),
            ("B".to_owned(), true),
            ("C".to_owned(), false)
        ]
    );
}

#[test]
fn failed_library_stops_pipeline() {
    let (context, reporter) = context(environment().reject_construction(1));
    let compiler = FixedCompiler::new(vec![
        library("lib.sol:A", "aa", &[]),
        library("lib.sol:B", "bb", &[]),
        library("main.sol:C", "cc", &["lib.sol:A", "lib.sol:B"]),
    ]);
    let pipeline = Pipeline::new(compiler, &context, CompilerSettings::default());

    assert!(matches!(
        pipeline.compile_and_deploy(&["main.sol".into()], "C"),
        Err(Error::Deployment { name, .. }) if name == "B"
    ));
    assert_eq!(context.environment().constructions().len(), 1);
    assert_eq!(reporter.transaction_names(), vec!["A"]);
}

#[test]
fn unknown_contract() {
    let (context, _reporter) = context(environment());
    let compiler = FixedCompiler::new(vec![request_storage()]);
    let pipeline = Pipeline::new(compiler, &context, CompilerSettings::default());

    assert!(matches!(
        pipeline.compile_and_deploy(&["RequestStorage.sol".into()], "Token"),
        Err(Error::NotFound { name }) if name == "Token"
    ));
    assert!(context.environment().constructions().is_empty());
}

#[test]
fn compilation_error_propagated() {
    let (context, _reporter) = context(environment());
    let pipeline = Pipeline::new(FailingCompiler, &context, CompilerSettings::default());

    assert!(matches!(
        pipeline.compile_and_deploy(&["RequestStorage.sol".into()], "RequestStorage"),
        Err(Error::Compilation { .. })
    ));
}
