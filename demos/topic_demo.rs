use social_npc_link::{ClientConfig, InteractionLogRequest, MemoryClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Social NPC Link Demo ===\n");

    let config = ClientConfig::from_env()?;
    println!("Service: {}\n", config.base_url);
    let client = MemoryClient::new(config)?;

    // One pair at a time
    let topic = client.generate_topic("alice", "bob").await;
    println!("Alice and Bob talk about: {}", topic);

    // Several pairs at once
    let pairs = [("carol", "dave"), ("erin", "frank"), ("alice", "frank")];
    let topics = client.generate_topics(pairs).await;
    for ((a, b), topic) in pairs.iter().zip(&topics) {
        println!("{} and {} talk about: {}", a, b, topic);
    }
    println!();

    // Report how the first conversation went
    let interaction = InteractionLogRequest::new("alice", "bob", topic)
        .with_summary("Bob bought Alice a drink and they laughed about old times")
        .with_tone("nostalgic")
        .with_impact(0.75);

    let delivery = client.log_interaction(&interaction).await;
    match delivery.error() {
        None => println!("Interaction stored"),
        Some(e) => println!("Interaction not stored: {}", e),
    }

    Ok(())
}
