//! Testimonial API

use shared::models::{Testimonial, TestimonialCreate, TestimonialUpdate};

use super::resource::TESTIMONIALS;
use crate::error::ClientResult;
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct TestimonialService<C> {
    client: C,
}

impl<C: HttpClient> TestimonialService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn list_all(&self) -> ClientResult<Vec<Testimonial>> {
        TESTIMONIALS.list_all(&self.client).await
    }

    pub async fn create(&self, payload: &TestimonialCreate) -> ClientResult<Testimonial> {
        TESTIMONIALS.create(&self.client, payload).await
    }

    pub async fn update(&self, id: &str, payload: &TestimonialUpdate) -> ClientResult<Testimonial> {
        TESTIMONIALS.update(&self.client, id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        TESTIMONIALS.remove(&self.client, id).await
    }
}
