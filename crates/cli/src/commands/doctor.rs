//! `planeslore doctor` — Diagnose configuration and provider health.

use planeslore_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 Planeslore Doctor — System Diagnostics");
    println!("=========================================\n");

    let mut issues = 0;

    // Check config
    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Configuration valid");
            Some(config)
        }
        Err(e) => {
            println!("  ❌ Configuration invalid: {e}");
            issues += 1;
            None
        }
    };

    if let Some(config) = config {
        // Check API key
        if config.has_api_key() {
            println!("  ✅ API key configured");

            // Check provider reachability
            match planeslore_provider::build_from_config(&config) {
                Ok(lore) => match lore.health_check().await {
                    Ok(true) => println!("  ✅ Provider reachable at {}", config.api_url),
                    Ok(false) => {
                        println!("  ⚠️  Provider responded with an error — check the API key");
                        issues += 1;
                    }
                    Err(e) => {
                        println!("  ❌ Provider unreachable: {e}");
                        issues += 1;
                    }
                },
                Err(e) => {
                    println!("  ❌ Could not build provider: {e}");
                    issues += 1;
                }
            }
        } else {
            println!("  ⚠️  No API key — set OPENAI_API_KEY or add api_key to config.toml");
            issues += 1;
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
