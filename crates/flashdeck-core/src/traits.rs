/// Two-way mapping between an entity and the field set an editor works on.
pub trait Editable<T>: Sized {
    fn from_entity(entity: &T) -> Self;
    fn apply_to(self, entity: &mut T);
}
