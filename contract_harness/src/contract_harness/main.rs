//!
//! The contract harness executable.
//!

pub(crate) mod arguments;

use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => contract_harness::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            contract_harness::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    let config = contract_harness::Config::try_from(arguments.config.as_path())?;
    if !arguments.quiet {
        println!(
            "    {} {} v{} (solc v{})",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
            config.compiler_version,
        );
    }

    let http_client = reqwest::blocking::Client::builder()
        .timeout(config.request_timeout())
        .build()?;
    let executable = contract_harness::Downloader::new(http_client)
        .download(&config.compiler_version, config.compiler_directory.as_path())?;
    let compiler = contract_harness::SolcCompiler::new(executable)?;

    let environment = contract_harness::RpcEnvironment::new(
        config.endpoint_address.clone(),
        config.request_timeout(),
    )?;
    let reporter = contract_harness::ConsoleReporter::new(
        arguments.verbose,
        arguments.quiet,
        arguments
            .calldata_output
            .or_else(|| config.calldata_output.clone()),
    )?;
    let context =
        contract_harness::Context::new(environment, config.confirmation(), Box::new(reporter))?;

    let sources = if arguments.source.is_empty() {
        vec![config.default_source(arguments.contract.as_str())]
    } else {
        arguments.source
    };

    let run_time_start = Instant::now();
    if !arguments.quiet {
        println!(
            "   {} `{}` to {} from 0x{}",
            "Deploying".bright_green().bold(),
            arguments.contract,
            config.endpoint_address,
            hex::encode(context.sender().as_bytes()),
        );
    }

    let pipeline =
        contract_harness::Pipeline::new(compiler, &context, config.compiler_settings());
    let instance = pipeline.compile_and_deploy(sources.as_slice(), arguments.contract.as_str())?;

    for function in arguments.call.iter() {
        let outputs = instance.call(function.as_str(), &[])?;
        if !arguments.quiet {
            println!(
                "      {} {}() => [{}]",
                "Called".bright_green().bold(),
                function,
                outputs
                    .iter()
                    .map(|token| token.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }
    }

    if !arguments.quiet {
        println!(
            "    {} deploying `{}` in {}m{:02}s",
            "Finished".bright_green().bold(),
            arguments.contract,
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
        );
    }

    Ok(())
}
