//!
//! The contract harness library.
//!

pub mod artifact;
pub mod compiler;
pub mod config;
pub mod context;
pub mod deployer;
pub mod environment;
pub mod error;
pub mod instance;
pub mod linker;
pub mod pipeline;
pub mod reporter;
pub(crate) mod utils;

pub use self::artifact::bytecode::Bytecode;
pub use self::artifact::bytecode::LinkedBytecode;
pub use self::artifact::set::ArtifactSet;
pub use self::artifact::Artifact;
pub use self::compiler::downloader::Downloader;
pub use self::compiler::settings::Settings as CompilerSettings;
pub use self::compiler::solc::SolcCompiler;
pub use self::compiler::Compiler;
pub use self::config::Config;
pub use self::context::Context;
pub use self::deployer::deployed_contract::DeployedContract;
pub use self::deployer::Deployer;
pub use self::environment::confirmation::Confirmation;
pub use self::environment::memory::MemoryEnvironment;
pub use self::environment::receipt::Receipt;
pub use self::environment::rpc::RpcEnvironment;
pub use self::environment::Environment;
pub use self::error::Error;
pub use self::error::Result;
pub use self::instance::Instance;
pub use self::linker::Linker;
pub use self::pipeline::Pipeline;
pub use self::reporter::console::ConsoleReporter;
pub use self::reporter::memory::MemoryReporter;
pub use self::reporter::Reporter;
pub use self::reporter::TransactionReport;

/// The successful process exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failed process exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
