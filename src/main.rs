use chip_etl::utils::logger;
use chip_etl::{CliConfig, EtlEngine, LocalStorage};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting chip-etl");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入設定檔並驗證配置
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let engine = EtlEngine::new(LocalStorage::new(), settings);

    match engine.run() {
        Ok(summary) => {
            tracing::info!("✅ Conversion completed successfully!");
            println!(
                "✅ {} records written to {}",
                summary.rows_processed,
                summary.records_dir.display()
            );
            println!("📁 Output table: {}", summary.output_table.display());
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
