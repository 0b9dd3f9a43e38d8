use std::time::Duration;

use tracing::debug;

use super::pause;
use crate::data::fixtures;
use crate::domain::friend::Friend;

pub const DEFAULT_FRIENDS_DELAY: Duration = Duration::from_millis(500);

pub struct FriendService {
    friends: Vec<Friend>,
    delay: Duration,
}

impl FriendService {
    pub fn new(friends: Vec<Friend>) -> Self {
        Self {
            friends,
            delay: DEFAULT_FRIENDS_DELAY,
        }
    }

    pub fn with_fixture() -> Self {
        Self::new(fixtures::friends())
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn get_friends(&self) -> Vec<Friend> {
        pause(self.delay).await;
        self.friends.clone()
    }

    /// A miss is `None`, not an error.
    pub async fn get_friend_by_name(&self, name: &str) -> Option<Friend> {
        let found = self
            .get_friends()
            .await
            .into_iter()
            .find(|friend| friend.name == name);
        if found.is_none() {
            debug!(friend_name = name, "friend not found");
        }
        found
    }
}
