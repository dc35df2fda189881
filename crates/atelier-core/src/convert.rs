//! API DTO → domain type conversion.

use atelier_api::wp::Post;

use crate::model::Collection;

/// Map a wire post into a domain [`Collection`].
///
/// Pure field mapping; the curation filter is applied separately by the
/// [`Portfolio`](crate::Portfolio) so tests can build collections directly.
pub fn collection_from_post(post: Post) -> Collection {
    let featured_media = post.featured_media_url().map(str::to_owned);
    Collection {
        title: post.title.rendered,
        link: post.link,
        content_html: post.content.rendered,
        featured_media,
    }
}
