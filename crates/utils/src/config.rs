use clap::Parser;

#[derive(clap::ValueEnum, Clone, Debug, Copy)]
#[clap(rename_all = "lowercase")]
pub enum CargoEnv {
    Development,
    Production,
}

/// 环境配置加载器
pub struct EnvLoader;

impl EnvLoader {
    /// 根据 CARGO_ENV 加载对应的环境配置文件
    pub fn load_env_file() -> Result<(), Box<dyn std::error::Error>> {
        // 1. 获取环境变量 CARGO_ENV
        let cargo_env = std::env::var("CARGO_ENV").unwrap_or_else(|_| "development".to_string());

        // 2. 构建配置文件路径
        let env_file = match cargo_env.as_str() {
            "production" | "Production" | "prod" => ".env.production",
            "development" | "Development" | "dev" => ".env.development",
            "test" | "Test" => ".env.test",
            _ => {
                println!("⚠️  未知的 CARGO_ENV: {}，使用默认的 .env.development", cargo_env);
                ".env.development"
            }
        };

        // 3. 检查文件是否存在，不存在时回退到默认的 .env
        if !std::path::Path::new(env_file).exists() {
            eprintln!("⚠️  配置文件 {} 不存在，尝试加载默认的 .env 文件", env_file);
            if std::path::Path::new(".env").exists() {
                dotenvy::from_filename(".env")?;
                println!("✅ 已加载默认配置文件: .env");
            } else {
                eprintln!("❌ 未找到任何配置文件，使用默认配置");
            }
            return Ok(());
        }

        // 4. 加载指定的环境配置文件
        dotenvy::from_filename(env_file)?;
        println!("✅ 已加载环境配置文件: {} (CARGO_ENV={})", env_file, cargo_env);

        Ok(())
    }
}

#[derive(clap::Parser, Clone)]
pub struct AppConfig {
    #[clap(long, env, value_enum)]
    pub cargo_env: CargoEnv,

    #[clap(long, env, default_value = "0.0.0.0")]
    pub app_host: String,

    #[clap(long, env, default_value = "8000")]
    pub app_port: u16,

    #[clap(long, env, default_value = "mongodb://localhost:27017")]
    pub mongo_uri: String,

    #[clap(long, env)]
    pub mongo_db: String,

    #[clap(long, env, default_value = "info")]
    pub rust_log: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        EnvLoader::load_env_file().ok();
        AppConfig::parse()
    }
}

impl AppConfig {
    /// 手动创建配置实例（用于测试）
    pub fn new_for_test() -> Self {
        Self {
            cargo_env: CargoEnv::Development,
            app_host: "0.0.0.0".to_string(),
            app_port: 8765,
            mongo_uri: std::env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db: std::env::var("MONGO_DB").unwrap_or_else(|_| "test_db".to_string()),
            rust_log: "info".to_string(),
        }
    }
}
