use clap::Parser;
use menu_fix_rust::{cli, config, corrector, document, error, fixup, lexicon, pricelist, pricer, report, rules};

use cli::{Cli, Commands};
use config::Config;
use document::MenuDocument;
use error::Result;
use report::CorrectionReport;
use rules::Rules;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Correct { file, report: report_flag, dry_run } => {
            println!("🍽 menu-fix - price correction\n");

            let doc_path = config.resolve_document(file);
            let report_path =
                config.resolve_report(report_flag, "price_correction_report.json");

            println!("[1/4] Loading {}...", doc_path.display());
            let mut doc = MenuDocument::load(&doc_path)?;
            println!("✔ {} menus loaded\n", doc.menus.len());

            let rules = Rules::default();
            let mut run_report = CorrectionReport::new();

            println!("[2/4] Correcting ingredient data...");
            let corrected =
                corrector::correct_document(&mut doc, &rules, &mut run_report, cli.verbose);
            println!(
                "✔ {} ingredients checked: {} costs rescaled, {} units relabeled, {} dropped\n",
                corrected.total, corrected.rescaled_costs, corrected.relabeled_units, corrected.dropped
            );

            println!("[3/4] Deriving resale prices...");
            let priced = pricer::price_document(&mut doc, &rules, &mut run_report, cli.verbose);
            println!(
                "✔ {} resale items: {} updated, {} unmatched, {} rejected\n",
                priced.resale_items, priced.updated, priced.mismatched, priced.rejected
            );

            println!("[4/4] Saving...");
            if dry_run {
                println!("  dry run: document left untouched");
            } else {
                doc.save(&doc_path)?;
                println!("✔ document saved: {}", doc_path.display());
            }
            report::write_report(&report_path, &run_report)?;
            println!("✔ report saved: {}", report_path.display());

            if !run_report.is_clean() {
                println!("\n⚠ some records need review, see the report");
            }
            println!("\n✅ correction complete");
        }

        Commands::Refresh { prices, aliases, file, report: report_flag } => {
            println!("🧾 menu-fix - price list refresh\n");

            let doc_path = config.resolve_document(file);
            let report_path =
                config.resolve_report(report_flag, "ingredient_refresh_report.json");

            println!("[1/3] Loading price list {}...", prices.display());
            let price_list = pricelist::PriceList::load(&prices)?;
            let mut alias_table = pricelist::IngredientAliases::builtin();
            if let Some(alias_path) = aliases {
                alias_table.merge(&pricelist::IngredientAliases::from_file(&alias_path)?);
            }
            println!("✔ {} price entries\n", price_list.len());

            println!("[2/3] Refreshing {}...", doc_path.display());
            let mut doc = MenuDocument::load(&doc_path)?;
            let refresh_report =
                pricelist::refresh_ingredients(&mut doc, &price_list, &alias_table, cli.verbose);
            println!(
                "✔ {} ingredients refreshed, {} without a price\n",
                refresh_report.updated_ingredients.len(),
                refresh_report.unmatched_ingredients.len()
            );

            println!("[3/3] Saving...");
            doc.save(&doc_path)?;
            report::write_report(&report_path, &refresh_report)?;
            println!("✔ document saved: {}", doc_path.display());
            println!("✔ report saved: {}", report_path.display());

            println!("\n✅ refresh complete");
        }

        Commands::Describe { lexicon: lexicon_path, file, report: report_flag } => {
            println!("📖 menu-fix - description backfill\n");

            let doc_path = config.resolve_document(file);
            let report_path = config.resolve_report(report_flag, "description_report.json");

            println!("[1/3] Loading lexicon {}...", lexicon_path.display());
            let entries = lexicon::load_lexicon(&lexicon_path)?;
            println!("✔ {} dish descriptions\n", entries.len());

            println!("[2/3] Backfilling {}...", doc_path.display());
            let mut doc = MenuDocument::load(&doc_path)?;
            let describe_report =
                lexicon::backfill_descriptions(&mut doc, &entries, cli.verbose);
            println!(
                "✔ {} items described, {} unmatched\n",
                describe_report.described_items.len(),
                describe_report.unmatched_items.len()
            );

            println!("[3/3] Saving...");
            doc.save(&doc_path)?;
            report::write_report(&report_path, &describe_report)?;
            println!("✔ document saved: {}", doc_path.display());
            println!("✔ report saved: {}", report_path.display());

            println!("\n✅ backfill complete");
        }

        Commands::Fix { file, report: report_flag } => {
            println!("🔧 menu-fix - document repair\n");

            let doc_path = config.resolve_document(file);
            let report_path = config.resolve_report(report_flag, "fix_report.json");

            println!("[1/2] Repairing {}...", doc_path.display());
            let mut doc = MenuDocument::load(&doc_path)?;
            let fix_report = fixup::fix_document(&mut doc, &fixup::FixupRanges::default(), cli.verbose);
            println!(
                "✔ {} recipe flags set, {} buying prices defaulted, {} units converted, {} ingredients dropped\n",
                fix_report.recipe_flags_set,
                fix_report.default_buying_prices,
                fix_report.converted_units.len(),
                fix_report.dropped_ingredients.len()
            );

            println!("[2/2] Saving...");
            doc.save(&doc_path)?;
            report::write_report(&report_path, &fix_report)?;
            println!("✔ document saved: {}", doc_path.display());
            println!("✔ report saved: {}", report_path.display());

            println!("\n✅ repair complete");
        }

        Commands::Config { set_file, set_report_dir, show } => {
            let mut config = config;

            if let Some(path) = set_file {
                config.menus_path = Some(path);
                config.save()?;
                println!("✔ default document path set");
            }

            if let Some(dir) = set_report_dir {
                config.report_dir = Some(dir);
                config.save()?;
                println!("✔ report directory set");
            }

            if show {
                println!("configuration:");
                println!(
                    "  document: {}",
                    config.resolve_document(None).display()
                );
                println!(
                    "  reports:  {}",
                    config
                        .report_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| ".".to_string())
                );
            }
        }
    }

    Ok(())
}
