/*
 * Symbol Table - members and nesting of one compilation unit
 *
 * Lookups follow Java's rules for simple names, restricted to what the unit
 * declares:
 * - members come from the type, then its in-unit supertypes
 * - then from each lexically enclosing type, innermost first
 * - a supertype outside the unit (or an implicit one such as `Enum`) may
 *   declare anything, so a miss behind it is `Lookup::Opaque`, never a
 *   silent fall-through to an outer scope
 */

use rustc_hash::{FxHashMap, FxHashSet};

use crate::features::syntax_tree::{
    CompilationUnit, FieldRef, ImportDecl, MethodRef, ModifierKind, Owner, TypeDecl, TypeKind,
};
use crate::shared::models::{MethodId, NodeId, TypeId};
use crate::shared::utils::IdGenerator;

use super::naming::simple_type_name;
use super::symbols::{FieldSymbol, MethodSymbol, TypeSymbol};

/// Instance methods every class inherits from `java.lang.Object`
const OBJECT_METHODS: &[&str] = &[
    "clone",
    "equals",
    "finalize",
    "getClass",
    "hashCode",
    "notify",
    "notifyAll",
    "toString",
    "wait",
];

/// Outcome of a member lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    /// Not declared in the unit, but a supertype outside the unit may declare it
    Opaque,
    /// Not declared anywhere the name could come from
    Absent,
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Opaque | Lookup::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    types: FxHashMap<TypeId, TypeSymbol>,
    /// Pre-order, as declared
    order: Vec<TypeId>,
    method_ids: FxHashMap<NodeId, MethodId>,
    imports: Vec<ImportDecl>,
    package_roots: FxHashSet<String>,
}

impl SymbolTable {
    pub fn build(unit: &CompilationUnit) -> Self {
        let mut table = SymbolTable {
            imports: unit.imports.clone(),
            ..Default::default()
        };

        let roots = unit
            .package
            .iter()
            .map(String::as_str)
            .chain(unit.imports.iter().map(|i| i.path.as_str()))
            .chain(["java", "javax"]);
        for path in roots {
            if let Some(root) = path.split('.').next().filter(|r| !r.is_empty()) {
                table.package_roots.insert(root.to_string());
            }
        }

        let mut ids = IdGenerator::new();
        for ty in &unit.types {
            table.collect(ty, None, &mut ids);
        }
        table.link_supertypes(unit);
        table
    }

    fn collect(&mut self, ty: &TypeDecl, outer: Option<&TypeDecl>, ids: &mut IdGenerator) {
        let interface_like = matches!(ty.kind, TypeKind::Interface | TypeKind::Annotation);
        let implicitly_static = !matches!(ty.kind, TypeKind::Class)
            || outer.map_or(false, |o| {
                matches!(o.kind, TypeKind::Interface | TypeKind::Annotation)
            });
        let is_inner =
            outer.is_some() && !implicitly_static && !ty.modifiers.has(ModifierKind::Static);

        let mut fields = Vec::new();
        for field in &ty.fields {
            let is_static = interface_like || field.modifiers.has(ModifierKind::Static);
            fields.extend(field.names.iter().map(|name| FieldSymbol {
                name: name.clone(),
                is_static,
            }));
        }
        fields.extend(ty.enum_constants.iter().map(|name| FieldSymbol {
            name: name.clone(),
            is_static: true,
        }));
        fields.extend(ty.record_components.iter().map(|name| FieldSymbol {
            name: name.clone(),
            is_static: false,
        }));

        let mut methods = Vec::new();
        for method in &ty.methods {
            let id = ids.next_method();
            self.method_ids.insert(method.id, id);
            methods.push(MethodSymbol {
                id,
                node: method.id,
                name: method.name.clone(),
                arity: method.arity(),
                varargs: method.is_varargs(),
                is_static: method.is_static(),
            });
        }
        // implicit record accessors, unless declared explicitly
        for component in &ty.record_components {
            if !methods.iter().any(|m| &m.name == component && m.arity == 0) {
                methods.push(MethodSymbol {
                    id: ids.next_method(),
                    node: NodeId::SYNTHETIC,
                    name: component.clone(),
                    arity: 0,
                    varargs: false,
                    is_static: false,
                });
            }
        }

        self.types.insert(
            ty.id,
            TypeSymbol {
                id: ty.id,
                name: ty.name.clone(),
                kind: ty.kind,
                outer: outer.map(|o| o.id),
                is_inner,
                type_parameters: ty.type_parameters.clone(),
                supertypes: Vec::new(),
                // enums inherit `name()`, `ordinal()`, ... from java.lang.Enum
                has_external_supertype: ty.kind == TypeKind::Enum,
                fields,
                methods,
                nested: ty.nested.iter().map(|n| n.id).collect(),
            },
        );
        self.order.push(ty.id);

        for nested in &ty.nested {
            self.collect(nested, Some(ty), ids);
        }
    }

    fn link_supertypes(&mut self, unit: &CompilationUnit) {
        let mut links = Vec::new();
        for ty in unit.all_types() {
            let mut supertypes = Vec::new();
            let mut external = false;
            for name in ty.extends.iter().chain(&ty.implements) {
                match self.find_type(simple_type_name(name), ty.id) {
                    Some(Owner::Unit(id)) if id != ty.id => supertypes.push(id),
                    _ => external = true,
                }
            }
            links.push((ty.id, supertypes, external));
        }
        for (id, supertypes, external) in links {
            if let Some(symbol) = self.types.get_mut(&id) {
                symbol.supertypes = supertypes;
                symbol.has_external_supertype |= external;
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Types
    // ═══════════════════════════════════════════════════════════════════════

    pub fn get(&self, id: TypeId) -> Option<&TypeSymbol> {
        self.types.get(&id)
    }

    /// All types, pre-order
    pub fn types(&self) -> impl Iterator<Item = &TypeSymbol> {
        self.order.iter().filter_map(|id| self.types.get(id))
    }

    pub fn method_id(&self, node: NodeId) -> Option<MethodId> {
        self.method_ids.get(&node).copied()
    }

    pub fn is_package_root(&self, name: &str) -> bool {
        self.package_roots.contains(name)
    }

    /// The type and its in-unit supertypes, transitively, nearest first
    pub fn receiver_chain(&self, id: TypeId) -> Vec<TypeId> {
        let mut chain = Vec::new();
        let mut seen = FxHashSet::default();
        let mut queue = std::collections::VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            chain.push(current);
            if let Some(symbol) = self.types.get(&current) {
                queue.extend(symbol.supertypes.iter().copied());
            }
        }
        chain
    }

    /// The type followed by its lexically enclosing types, innermost first
    pub fn lexical_scopes(&self, id: TypeId) -> Vec<TypeId> {
        let mut scopes = vec![id];
        let mut current = self.types.get(&id).and_then(|t| t.outer);
        while let Some(outer) = current {
            scopes.push(outer);
            current = self.types.get(&outer).and_then(|t| t.outer);
        }
        scopes
    }

    /// Types whose instance members are reachable without an explicit
    /// receiver from code in `id`
    pub fn implicit_receiver_types(&self, id: TypeId) -> Vec<TypeId> {
        let mut receivers = self.receiver_chain(id);
        let mut current = self.types.get(&id);
        while let Some(symbol) = current.filter(|s| s.is_inner) {
            let Some(outer) = symbol.outer else { break };
            for t in self.receiver_chain(outer) {
                if !receivers.contains(&t) {
                    receivers.push(t);
                }
            }
            current = self.types.get(&outer);
        }
        receivers
    }

    /// Type parameters usable in instance code of `id`
    pub fn type_parameters_in_scope(&self, id: TypeId) -> Vec<String> {
        let mut params = Vec::new();
        let mut current = self.types.get(&id);
        while let Some(symbol) = current {
            params.extend(symbol.type_parameters.iter().cloned());
            current = if symbol.is_inner {
                symbol.outer.and_then(|o| self.types.get(&o))
            } else {
                None
            };
        }
        params
    }

    fn chain_is_opaque(&self, chain: &[TypeId]) -> bool {
        chain
            .iter()
            .filter_map(|t| self.types.get(t))
            .any(|t| t.has_external_supertype)
    }

    /// Resolve a simple type name as seen from code in `from`
    pub fn find_type(&self, name: &str, from: TypeId) -> Option<Owner> {
        for scope in self.lexical_scopes(from) {
            if self.types.get(&scope).map_or(false, |t| t.name == name) {
                return Some(Owner::Unit(scope));
            }
            for member_of in self.receiver_chain(scope) {
                let Some(symbol) = self.types.get(&member_of) else { continue };
                for nested in &symbol.nested {
                    if self.types.get(nested).map_or(false, |t| t.name == name) {
                        return Some(Owner::Unit(*nested));
                    }
                }
            }
        }
        self.nested_or_top_level(name)
    }

    fn nested_or_top_level(&self, name: &str) -> Option<Owner> {
        let top = self
            .order
            .iter()
            .filter_map(|id| self.types.get(id))
            .find(|t| t.outer.is_none() && t.name == name);
        if let Some(top) = top {
            return Some(Owner::Unit(top.id));
        }
        self.imports
            .iter()
            .find(|i| !i.is_static && !i.is_wildcard && i.simple_name() == name)
            .map(|i| Owner::External(i.path.clone()))
    }

    /// Nested type `name` declared by `owner` or its supertypes
    pub fn member_type(&self, owner: TypeId, name: &str) -> Option<TypeId> {
        self.receiver_chain(owner).into_iter().find_map(|t| {
            self.types.get(&t)?.nested.iter().copied().find(|n| {
                self.types.get(n).map_or(false, |s| s.name == name)
            })
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Fields
    // ═══════════════════════════════════════════════════════════════════════

    /// Field `name` declared by `owner` or one of its supertypes
    pub fn lookup_field_in(&self, owner: TypeId, name: &str) -> Lookup<FieldRef> {
        let chain = self.receiver_chain(owner);
        for t in &chain {
            if let Some(field) = self.types.get(t).and_then(|s| s.field(name)) {
                return Lookup::Found(FieldRef {
                    owner: Owner::Unit(*t),
                    name: field.name.clone(),
                    is_static: field.is_static,
                });
            }
        }
        if self.chain_is_opaque(&chain) {
            Lookup::Opaque
        } else {
            Lookup::Absent
        }
    }

    /// Field named by a simple name in code of `from`
    pub fn lookup_field(&self, from: TypeId, name: &str) -> Lookup<FieldRef> {
        for scope in self.lexical_scopes(from) {
            match self.lookup_field_in(scope, name) {
                Lookup::Absent => continue,
                other => return other,
            }
        }
        Lookup::Absent
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Methods
    // ═══════════════════════════════════════════════════════════════════════

    /// Methods named `name` in `owner` or its supertypes that accept `arity`
    /// arguments. Candidates are `None` when the name is declared but no
    /// declaration fits the arity.
    pub fn lookup_methods_in(
        &self,
        owner: TypeId,
        name: &str,
        arity: usize,
    ) -> Lookup<Vec<(TypeId, MethodSymbol)>> {
        let chain = self.receiver_chain(owner);
        let mut named = false;
        let mut candidates = Vec::new();
        for t in &chain {
            let Some(symbol) = self.types.get(t) else { continue };
            for method in symbol.methods_named(name) {
                named = true;
                if method.accepts_arity(arity) {
                    candidates.push((*t, method.clone()));
                }
            }
        }
        if named {
            return Lookup::Found(candidates);
        }
        if self.chain_is_opaque(&chain) || OBJECT_METHODS.contains(&name) {
            Lookup::Opaque
        } else {
            Lookup::Absent
        }
    }

    /// Target of an unqualified invocation `name(args)` in code of `from`
    ///
    /// `None` when the target cannot be pinned down: nothing declares it, an
    /// external supertype may declare it, or static and instance overloads
    /// compete.
    pub fn resolve_unqualified_call(&self, from: TypeId, name: &str, arity: usize) -> Option<MethodRef> {
        for scope in self.lexical_scopes(from) {
            match self.lookup_methods_in(scope, name, arity) {
                Lookup::Found(candidates) => return Self::select(name, candidates),
                Lookup::Opaque => return None,
                Lookup::Absent => continue,
            }
        }
        self.static_import(name).map(|owner| MethodRef {
            id: None,
            owner,
            name: name.to_string(),
            is_static: true,
        })
    }

    /// Target of `Owner.name(args)` where the qualifier names a unit type
    pub fn resolve_type_qualified_call(&self, owner: TypeId, name: &str, arity: usize) -> MethodRef {
        let fallback = MethodRef {
            id: None,
            owner: Owner::Unit(owner),
            name: name.to_string(),
            is_static: true,
        };
        match self.lookup_methods_in(owner, name, arity) {
            Lookup::Found(candidates) => Self::select(name, candidates).unwrap_or(fallback),
            Lookup::Opaque | Lookup::Absent => fallback,
        }
    }

    /// Target of `this.name(args)` in code of `from`
    pub fn resolve_self_call(&self, from: TypeId, name: &str, arity: usize) -> Option<MethodRef> {
        match self.lookup_methods_in(from, name, arity) {
            Lookup::Found(candidates) => Self::select(name, candidates),
            Lookup::Opaque | Lookup::Absent => None,
        }
    }

    fn select(name: &str, candidates: Vec<(TypeId, MethodSymbol)>) -> Option<MethodRef> {
        match candidates.as_slice() {
            [] => None,
            [(owner, method)] => Some(MethodRef {
                id: Some(method.id),
                owner: Owner::Unit(*owner),
                name: name.to_string(),
                is_static: method.is_static,
            }),
            [(owner, _), ..] => {
                let all_static = candidates.iter().all(|(_, m)| m.is_static);
                let all_instance = candidates.iter().all(|(_, m)| !m.is_static);
                // an overload set is resolved only when every choice agrees
                (all_static || all_instance).then(|| MethodRef {
                    id: None,
                    owner: Owner::Unit(*owner),
                    name: name.to_string(),
                    is_static: all_static,
                })
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Imports
    // ═══════════════════════════════════════════════════════════════════════

    /// Declaring type of a single static import of `name`
    pub fn static_import(&self, name: &str) -> Option<Owner> {
        self.imports
            .iter()
            .find(|i| i.is_static && !i.is_wildcard && i.simple_name() == name)
            .map(|i| {
                let owner = i.path.rsplit_once('.').map_or("", |(owner, _)| owner);
                Owner::External(owner.to_string())
            })
    }

    /// First static on-demand import (`import static a.B.*;`)
    pub fn static_wildcard_import(&self) -> Option<Owner> {
        self.imports
            .iter()
            .find(|i| i.is_static && i.is_wildcard)
            .map(|i| Owner::External(i.path.clone()))
    }
}
