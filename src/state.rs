use campusgrid_cache::{PrivacyStore, RedisConfig, VisitorStore, connect};
use campusgrid_config::{ApiServerConfig, IdentConfig, SessionConfig};
use campusgrid_ident::Codec;
use campusgrid_rpc::ApiServerClient;

#[derive(Clone, Debug)]
pub struct AppState {
    pub rpc: ApiServerClient,
    pub codec: Codec,
    pub privacy: PrivacyStore,
    pub visitors: VisitorStore,
    pub session_config: SessionConfig,
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let api_config = ApiServerConfig::from_env();
    let ident_config = IdentConfig::from_env();
    let session_config = SessionConfig::from_env();
    let redis_config = RedisConfig::from_env();

    let codec = Codec::new(ident_config.secret.as_bytes());
    let rpc = ApiServerClient::new(api_config.base_url, api_config.timeout, codec.clone())?;

    let conn = connect(&redis_config.url).await?;
    let privacy = PrivacyStore::new(conn.clone());
    let visitors = VisitorStore::new(conn, redis_config.visitor_ttl);

    Ok(AppState {
        rpc,
        codec,
        privacy,
        visitors,
        session_config,
    })
}
