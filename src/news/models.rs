//! News and comment data models

use serde::{Deserialize, Serialize};

use crate::session::BasicUser;

#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub club_id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "contenido")]
    pub content: String,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "imagen_url", default)]
    pub image_url: Option<String>,
    #[serde(rename = "autor_id")]
    pub author_id: i64,
    #[serde(rename = "autor", default)]
    pub author: Option<BasicUser>,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
    #[serde(rename = "visible_para", default)]
    pub visibility: Option<String>,
    #[serde(rename = "permite_comentarios", default = "default_true")]
    pub comments_enabled: bool,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
    #[serde(rename = "fecha_actualizacion", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "comentarios_count", default)]
    pub comment_count: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct NewsCreate {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "contenido")]
    pub content: String,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "imagen_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "visible_para", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(rename = "permite_comentarios", skip_serializing_if = "Option::is_none")]
    pub comments_enabled: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
pub struct NewsUpdate {
    #[serde(rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "contenido", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "imagen_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "autor_id")]
    pub author_id: i64,
    #[serde(rename = "noticia_id")]
    pub news_id: i64,
    #[serde(rename = "contenido")]
    pub content: String,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
    #[serde(rename = "autor", default)]
    pub author: Option<BasicUser>,
}

#[derive(Debug, Serialize)]
pub struct CommentCreate {
    #[serde(rename = "contenido")]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

fn default_true() -> bool {
    true
}
