use anyhow::{Context, Result};

const ENV_FILE: &str = ".env.local";

fn load_env_file() {
    // Values already present in the process environment win.
    let _ = dotenv::from_filename(ENV_FILE);
}

fn required_var(name: &str) -> Result<String> {
    let value = std::env::var(name)
        .with_context(|| format!("{}: required variable {} is not set", ENV_FILE, name))?;
    if value.is_empty() {
        anyhow::bail!("{}: required variable {} is empty", ENV_FILE, name);
    }
    Ok(value)
}

#[derive(Debug, Clone)]
pub struct FalConfig {
    pub api_key: String,
}

impl FalConfig {
    pub fn from_env() -> Result<Self> {
        load_env_file();
        Ok(Self {
            api_key: required_var("FAL_KEY")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
}

impl GeminiConfig {
    pub fn from_env() -> Result<Self> {
        load_env_file();
        Ok(Self {
            api_key: required_var("GEMINI_API_KEY")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl CloudinaryConfig {
    pub fn from_env() -> Result<Self> {
        load_env_file();
        Ok(Self {
            cloud_name: required_var("CLOUDINARY_CLOUD_NAME")?,
            api_key: required_var("CLOUDINARY_API_KEY")?,
            api_secret: required_var("CLOUDINARY_API_SECRET")?,
        })
    }
}
