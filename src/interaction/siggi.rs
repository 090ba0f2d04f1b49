//! `/siggi`: replies with a picture of Albert Einstein.

use rand::{Rng, seq::IndexedRandom};
use tracing::{error, info, instrument};

use crate::{
    base::{
        config::Config,
        types::{EmbedResponse, Invocation, Res, Response, Void},
    },
    interaction::reply::InteractionReply,
    service::chat::Responder,
};

pub const NAME: &str = "siggi";
pub const DESCRIPTION: &str = "Get a picture of Albert Einstein";

pub const TITLE: &str = "Albert Einstein";
pub const COLOR: u32 = 0x1f8b4c;
pub const ERROR_MESSAGE: &str = "Sorry, something went wrong while getting Einstein's image! 🤔";

/// Picks one image uniformly from the pool.
pub fn select_image<'a, R>(pool: &'a [String], rng: &mut R) -> Res<&'a str>
where
    R: Rng + ?Sized,
{
    pool.choose(rng).map(String::as_str).ok_or_else(|| anyhow::anyhow!("The siggi image pool is empty."))
}

/// Builds the embed for the given image and requesting user.
pub fn build_embed(image_url: &str, user_name: &str) -> Response {
    Response::Embed(EmbedResponse {
        title: TITLE.to_string(),
        color: COLOR,
        image_url: image_url.to_string(),
        footer: format!("Requested by {user_name}"),
    })
}

#[instrument(skip_all, fields(user = %invocation.user_tag))]
pub async fn handle_siggi(invocation: Invocation, responder: Responder, config: Config) {
    let mut reply = InteractionReply::new(responder);

    // Process the invocation.
    let result = handle_siggi_internal(&invocation, &mut reply, &config).await;

    match result {
        Ok(()) => info!("Siggi command used by {} in {}", invocation.user_tag, invocation.location()),
        Err(err) => {
            error!("Error in siggi command: {}", err);

            if let Err(err) = reply.send_error(ERROR_MESSAGE).await {
                error!("Failed to send error message to user: {}", err);
            }
        }
    }
}

async fn handle_siggi_internal(invocation: &Invocation, reply: &mut InteractionReply, config: &Config) -> Void {
    // Acknowledge first; the platform only waits a few seconds for the initial response.
    reply.defer().await?;

    let image_url = select_image(&config.siggi_images, &mut rand::rng())?;
    let embed = build_embed(image_url, &invocation.user_name);

    reply.send(embed).await
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_single_image_pool() {
        let pool = vec!["a".to_string()];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            assert_eq!(select_image(&pool, &mut rng).unwrap(), "a");
        }
    }

    #[test]
    fn test_selection_stays_in_pool() {
        let pool = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let image = select_image(&pool, &mut rng).unwrap();
            assert!(pool.iter().any(|p| p == image));
            seen.insert(image.to_string());
        }

        assert_eq!(seen.len(), pool.len());
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);

        assert!(select_image(&[], &mut rng).is_err());
    }

    #[test]
    fn test_build_embed() {
        let Response::Embed(embed) = build_embed("https://example.com/a.jpg", "Ada") else {
            panic!("expected an embed");
        };

        assert_eq!(embed.title, "Albert Einstein");
        assert_eq!(embed.color, 0x1f8b4c);
        assert_eq!(embed.image_url, "https://example.com/a.jpg");
        assert_eq!(embed.footer, "Requested by Ada");
    }
}
