use anyhow::Context;
use clap::Parser;
use portfolio_common::FilterState;
use portfolio_site::{cli, config, logging, render, site};
use cli::{CatalogAction, Cli, Commands};
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Tags => {
            let content = site::load_content(&config, cli.catalog.as_deref())?;
            let catalog = content.catalog()?;
            for tag in catalog.tags().iter() {
                println!("{}", tag);
            }
        }

        Commands::Projects { tag, json } => {
            let content = site::load_content(&config, cli.catalog.as_deref())?;
            let catalog = content.catalog()?;

            let mut filter = FilterState::new();
            filter.select(tag);
            let projects = filter.apply(catalog.projects());
            tracing::debug!(tag = filter.selected(), matched = projects.len(), "filtered projects");

            if json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else if projects.is_empty() {
                println!("no projects match");
            } else {
                for project in projects {
                    println!("{}\t{}\t{}", project.id, project.title, project.tags.join(", "));
                }
            }
        }

        Commands::Render { output, assets } => {
            println!("🌐 portfolio - 静的HTML出力\n");

            let content = site::load_content(&config, cli.catalog.as_deref())?;
            let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
            let assets_dir = assets.or_else(|| config.assets_dir.clone());

            let options = render::RenderOptions::new(output_dir.clone(), assets_dir);
            let report = render::render_site(&content, &options)
                .with_context(|| format!("出力に失敗しました: {}", output_dir.display()))?;

            println!("✔ {}ページ / 素材{}件", report.pages, report.assets);
            println!(
                "✔ 書き込み {}件 / 変更なし {}件 / 削除 {}件",
                report.written, report.unchanged, report.removed
            );
            println!("\n✅ 出力完了: {}", output_dir.display());
        }

        Commands::Catalog { action } => match action {
            CatalogAction::Export { output } => {
                let content = site::load_content(&config, cli.catalog.as_deref())?;
                let json = content.to_json()?;
                match output {
                    Some(path) => {
                        std::fs::write(&path, json)
                            .with_context(|| format!("書き込みに失敗しました: {}", path.display()))?;
                        println!("✔ コンテンツを保存: {}", path.display());
                    }
                    None => println!("{}", json),
                }
            }
            CatalogAction::Check { file } => {
                let content = site::load_content_file(&file)?;
                let catalog = content.catalog()?;
                println!("✔ {} は有効です", file.display());
                println!("  プロジェクト: {}件", catalog.len());
                println!("  タグ: {}件", catalog.tags().len() - 1);
                println!("  職歴: {}件", content.experiences.len());
            }
        },

        Commands::Config { show, set_catalog, set_output, set_assets } => {
            let mut config = config;
            let changed = set_catalog.is_some() || set_output.is_some() || set_assets.is_some();

            if let Some(path) = set_catalog {
                config.catalog_path = Some(path);
            }
            if let Some(dir) = set_output {
                config.output_dir = dir;
            }
            if let Some(dir) = set_assets {
                config.assets_dir = Some(dir);
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                let show_path = |p: &Option<std::path::PathBuf>| {
                    p.as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                };
                println!("設定:");
                println!("  カタログ: {}", show_path(&config.catalog_path));
                println!("  出力先: {}", config.output_dir.display());
                println!("  素材: {}", show_path(&config.assets_dir));
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
