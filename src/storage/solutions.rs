use super::repository::Repository;
use super::types::{EntityKind, NewSolution, Solution};

impl Repository {
    /// Store a new solution card. Solutions have no unique key, so this
    /// cannot fail.
    pub async fn create_solution(&self, input: NewSolution) -> Solution {
        let mut store = self.write().await;
        let id = store.ids.next(EntityKind::Solution);
        let solution = Solution {
            id,
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            link: input.link,
            link_text: input.link_text,
        };
        store.solutions.insert(id, solution.clone());
        tracing::debug!(id, title = %solution.title, "Created solution");
        solution
    }

    /// All solution cards in creation order.
    pub async fn get_solutions(&self) -> Vec<Solution> {
        self.read().await.solutions.values().cloned().collect()
    }
}
