//! Landing page.

use axum::response::Html;

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(
        "<h1>Movies API</h1>\
         <ul>\
         <li>GET /movies</li>\
         <li>GET /movies?category1=&amp;category2=</li>\
         <li>GET /movies/{id}</li>\
         <li>POST /movies</li>\
         <li>PUT /movies/{id}</li>\
         <li>DELETE /movies/{id}</li>\
         </ul>",
    )
}
