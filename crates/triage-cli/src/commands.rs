use std::fs;
use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use triage_cli::summary::{
    component_table, dashboard_table, print_verify, register_table, requirements_table,
    standards_table,
};
use triage_cli::types::VerifyResult;
use triage_cli::verify::verify_reports;
use triage_core::{
    ClassifierOptions, ComponentEntry, DiagnosticNames, LineClassifier, ReportParser,
    SessionState, component_research_links, generate_requirements, lookup_component,
};
use triage_standards::StandardsRegistry;

use crate::cli::{ComponentArgs, RequirementsArgs, VerifyArgs};

pub fn run_verify(
    args: &VerifyArgs,
    registry: &StandardsRegistry,
    session: &mut SessionState,
) -> Result<VerifyResult> {
    let options = ClassifierOptions {
        permissive: args.permissive,
        diagnostic_names: if args.spaced_diagnostic_names {
            DiagnosticNames::Spaced
        } else {
            DiagnosticNames::Verbatim
        },
    };
    let parser = ReportParser::new(LineClassifier::new(options), registry.keywords.clone());
    let result = verify_reports(&args.files, &parser);
    for report in result.reports.iter().filter(|report| !report.is_empty()) {
        session.record_report(&report.classification);
    }
    if args.json {
        let json = serde_json::to_string_pretty(&result).context("serialize results")?;
        println!("{json}");
    } else {
        print_verify(&result, args.show_other);
    }
    Ok(result)
}

pub fn run_requirements(
    args: &RequirementsArgs,
    registry: &StandardsRegistry,
    session: &mut SessionState,
) -> Result<()> {
    let mut cases = args.cases.clone();
    if let Some(path) = &args.file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read test cases from {}", path.display()))?;
        cases.extend(content.lines().map(str::to_string));
    }
    if cases.is_empty() && !io::stdin().is_terminal() {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("read test cases from stdin")?;
        cases.extend(content.lines().map(str::to_string));
    }
    if cases.iter().all(|case| case.trim().is_empty()) {
        bail!("no test cases given (pass them as arguments, with --file, or on stdin)");
    }

    let requirements = generate_requirements(&cases, &registry.test_cases);
    session.record_requirements(requirements.len());
    info!(count = requirements.len(), "requirements generated");

    if args.json {
        let json = serde_json::to_string_pretty(&requirements).context("serialize requirements")?;
        println!("{json}");
        return Ok(());
    }
    println!("{}", requirements_table(&requirements));
    for requirement in &requirements {
        if let (Some(query), Some(url)) = (&requirement.research_query, requirement.research_url())
        {
            println!("Research link for '{query}': {url}");
        }
    }
    Ok(())
}

pub fn run_component(
    args: &ComponentArgs,
    registry: &StandardsRegistry,
    session: &mut SessionState,
) -> Result<()> {
    let Some(found) = lookup_component(&args.query, &registry.components) else {
        let query = args.query.trim();
        println!("'{query}' is not in the component database.");
        if !query.is_empty() {
            println!("Research with these links:");
            for (site, url) in component_research_links(query) {
                println!("  {site}: {url}");
            }
        }
        if args.add {
            warn!(query, "component not found; nothing added to the register");
        }
        return Ok(());
    };

    println!("Found: {}", found.part_number);
    println!("{}", component_table(&found));
    if args.add {
        let mut entry = ComponentEntry::from(&found);
        entry.notes = args.notes.clone().unwrap_or_default();
        session
            .add_component(entry)
            .context("add component to register")?;
        println!("Component '{}' added.", found.part_number);
    }
    Ok(())
}

pub fn run_standards(registry: &StandardsRegistry) {
    println!("{}", standards_table(&registry.keywords));
}

pub fn run_dashboard(session: &SessionState) {
    println!("{}", dashboard_table(session));
    if !session.components().is_empty() {
        println!();
        println!("Component Database:");
        println!("{}", register_table(session.components()));
    }
}
