use super::{Client, Image, User};
use crate::api::wire::PageInfo;
use serde::Deserialize;

/// Decoded body of the `/clients` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientsResponse {
    #[serde(flatten)]
    pub page: PageInfo,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub clients: Vec<Client>,
}

impl ClientsResponse {
    /// Attach images to users and users to clients, returning the clients.
    ///
    /// Each reference is the first record, in response order, whose id matches the foreign key.
    /// Unmatched keys leave the reference unset. Clients carry the image-hydrated user.
    #[must_use]
    pub fn hydrate(self) -> Vec<Client> {
        let Self {
            images, mut users, mut clients, ..
        } = self;

        for user in &mut users {
            user.image = user
                .image_id
                .and_then(|image_id| images.iter().find(|image| image.id == image_id))
                .cloned();
        }

        for client in &mut clients {
            client.user = client
                .user_id
                .and_then(|user_id| users.iter().find(|user| user.id == user_id))
                .cloned();
        }

        clients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: u64) -> Image {
        Image { id, ..Image::default() }
    }

    fn user(id: u64, image_id: Option<u64>) -> User {
        User {
            id,
            image_id,
            ..User::default()
        }
    }

    fn client(id: u64, user_id: Option<u64>) -> Client {
        Client {
            id,
            user_id,
            ..Client::default()
        }
    }

    #[test]
    fn test_hydrate_attaches_user_and_image() {
        let response = ClientsResponse {
            images: vec![image(5)],
            users: vec![user(1, Some(5))],
            clients: vec![client(2, Some(1))],
            ..ClientsResponse::default()
        };

        let clients = response.hydrate();
        assert_eq!(clients.len(), 1);

        let attached_user = clients[0].user.as_ref().unwrap();
        assert_eq!(attached_user.id, 1);
        assert_eq!(attached_user.image.as_ref().map(|image| image.id), Some(5));
    }

    #[test]
    fn test_hydrate_missing_user_is_not_an_error() {
        let response = ClientsResponse {
            users: vec![user(1, None)],
            clients: vec![client(3, Some(99))],
            ..ClientsResponse::default()
        };

        let clients = response.hydrate();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, 3);
        assert!(clients[0].user.is_none());
    }

    #[test]
    fn test_hydrate_missing_image_leaves_user_attached() {
        let response = ClientsResponse {
            images: vec![image(6)],
            users: vec![user(1, Some(5))],
            clients: vec![client(2, Some(1))],
            ..ClientsResponse::default()
        };

        let clients = response.hydrate();
        let attached_user = clients[0].user.as_ref().unwrap();
        assert!(attached_user.image.is_none());
    }

    #[test]
    fn test_hydrate_client_without_user_id() {
        let response = ClientsResponse {
            users: vec![user(0, None)],
            clients: vec![client(4, None)],
            ..ClientsResponse::default()
        };

        let clients = response.hydrate();
        assert!(clients[0].user.is_none());
    }

    #[test]
    fn test_hydrate_first_match_wins() {
        let mut first = user(1, None);
        first.first_name = Some("First".into());
        let mut second = user(1, None);
        second.first_name = Some("Second".into());

        let response = ClientsResponse {
            users: vec![first, second],
            clients: vec![client(2, Some(1))],
            ..ClientsResponse::default()
        };

        let clients = response.hydrate();
        assert_eq!(clients[0].user.as_ref().unwrap().first_name.as_deref(), Some("First"));
    }

    #[test]
    fn test_hydrate_shares_user_between_clients() {
        let response = ClientsResponse {
            users: vec![user(1, None)],
            clients: vec![client(2, Some(1)), client(3, Some(1))],
            ..ClientsResponse::default()
        };

        let clients = response.hydrate();
        assert_eq!(clients[0].user.as_ref().unwrap().id, 1);
        assert_eq!(clients[1].user.as_ref().unwrap().id, 1);
    }

    #[test]
    fn test_decode_and_hydrate() {
        let json = r#"{
            "page": 1,
            "total_pages": 1,
            "per_page": 25,
            "total_count": 2,
            "images": [{ "id": 5, "url": "https://cdn.example.com/5.png" }],
            "users": [{ "id": 1, "image_id": 5, "first_name": "Sam" }],
            "clients": [{ "id": 2, "user_id": 1 }, { "id": 3, "user_id": 99 }]
        }"#;

        let response: ClientsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.page.total_count, 2);

        let clients = response.hydrate();
        assert_eq!(clients.len(), 2);
        assert_eq!(
            clients[0].user.as_ref().and_then(|u| u.image.as_ref()).and_then(|i| i.url.as_deref()),
            Some("https://cdn.example.com/5.png")
        );
        assert!(clients[1].user.is_none());
    }

    #[test]
    fn test_hydrate_empty_response() {
        assert!(ClientsResponse::default().hydrate().is_empty());
    }
}
