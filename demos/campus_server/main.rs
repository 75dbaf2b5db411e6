//! Campus server: all four collections over REST and `/api?action=`
//!
//! ```text
//! cargo run --example campus_server                     # stock config, in memory
//! cargo run --example campus_server -- campus.yaml      # config file
//! CAMPUS_DATABASE_URL=mysql://... cargo run --example campus_server --features mysql
//! ```

use campus::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => CampusConfig::from_yaml_file(&path)?,
        None => {
            let mut config = CampusConfig::default_config();
            config.seed_sample_data = true;
            config
        }
    }
    .with_env_overrides();

    campus::init_tracing(&config.server.log_level);

    let bind = config.server.bind.clone();
    let host = CampusHost::connect(config).await?;

    println!("\n🚀 Campus hub running on http://{}", bind);
    println!("\n📚 Endpoints:");
    for plural in ["news", "activities", "notes", "events"] {
        println!("  GET/POST          /{plural}");
        println!("  GET/PUT/DELETE    /{plural}/{{id}}");
        println!("  GET/POST          /{plural}/{{id}}/comments");
        println!("  GET               /{plural}/categories");
    }
    println!("  POST              /activities/{{id}}/register");
    println!("  GET               /activities/{{id}}/registrations");
    println!("  GET               /clubs");
    println!("  *                 /api?action=...");
    println!("\n💡 Try: curl 'http://{}/news?dateRange=year&sort=title-asc'\n", bind);

    ServerBuilder::new().with_host(host).serve(&bind).await
}
