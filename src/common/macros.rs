/// Wires an entity type to its field on `EntityStore` and emits the named
/// per-kind operations (`add_event`, `update_event`, `delete_event`, `events`).
#[macro_export]
macro_rules! stored_collections {
    ($($entity:ty => $field:ident { $add:ident, $update:ident, $delete:ident }),+ $(,)?) => {
        $(
            impl $crate::store::Stored for $entity {
                fn collection(store: &$crate::store::EntityStore) -> &$crate::store::Collection<Self> {
                    &store.$field
                }

                fn collection_mut(
                    store: &mut $crate::store::EntityStore,
                ) -> &mut $crate::store::Collection<Self> {
                    &mut store.$field
                }
            }
        )+

        impl $crate::store::EntityStore {
            $(
                pub fn $add(
                    &mut self,
                    data: <$entity as $crate::models::Entity>::Create,
                ) -> $crate::models::EntityId {
                    self.add::<$entity>(data)
                }

                pub fn $update(&mut self, record: $entity) {
                    self.update::<$entity>(record)
                }

                pub fn $delete(&mut self, id: $crate::models::EntityId) {
                    self.delete::<$entity>(id)
                }

                pub fn $field(&self) -> ::std::sync::Arc<Vec<$entity>> {
                    self.all::<$entity>()
                }
            )+
        }
    };
}
