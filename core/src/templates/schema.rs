//! 模板Schema：以数据形式描述什么是合法模板。
//!
//! Schema是静态的声明式文档，结构校验器（validate模块）作为通用引擎
//! 读取它，因此Schema演进不需要改动校验逻辑。

/// 字段类型。整数字段在本Schema中一律要求非负。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Boolean,
    StringArray,
    /// 嵌套实体，值为实体名
    Object(&'static str),
    /// 嵌套实体列表
    ObjectArray(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

/// 封闭实体：仅允许列出的字段，未知字段即校验错误
#[derive(Debug, Clone, Copy)]
pub struct ObjectSpec {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

#[derive(Debug, Clone, Copy)]
pub struct SchemaDocument {
    pub root: &'static str,
    pub objects: &'static [ObjectSpec],
}

impl SchemaDocument {
    pub fn object(&self, name: &str) -> Option<&'static ObjectSpec> {
        self.objects.iter().find(|o| o.name == name)
    }
}

const fn field(name: &'static str, ty: FieldType, required: bool) -> FieldSpec {
    FieldSpec { name, ty, required }
}

const TEMPLATE: ObjectSpec = ObjectSpec {
    name: "Template",
    fields: &[
        field("name", FieldType::String, true),
        field("description", FieldType::String, true),
        field("tags", FieldType::StringArray, true),
        field("type", FieldType::String, true),
        field("requirements", FieldType::Object("Requirements"), true),
        field("regex", FieldType::ObjectArray("Regex"), false),
        field("output", FieldType::Object("Output"), false),
        field("match", FieldType::Object("Match"), false),
        field("script", FieldType::Object("Script"), false),
        field("pre_script", FieldType::Object("Script"), false),
        field("post_script", FieldType::Object("Script"), false),
    ],
};

const REQUIREMENTS: ObjectSpec = ObjectSpec {
    name: "Requirements",
    fields: &[
        field("tools", FieldType::StringArray, false),
        field("pip", FieldType::StringArray, false),
        field("npm", FieldType::StringArray, false),
    ],
};

const MATCH: ObjectSpec = ObjectSpec {
    name: "Match",
    fields: &[
        field("filename", FieldType::StringArray, true),
        field("exclude", FieldType::StringArray, true),
    ],
};

const OUTPUT: ObjectSpec = ObjectSpec {
    name: "Output",
    fields: &[field("uniq", FieldType::Boolean, true)],
};

const SCRIPT: ObjectSpec = ObjectSpec {
    name: "Script",
    fields: &[
        field("language", FieldType::String, true),
        field("code", FieldType::String, true),
    ],
};

const REGEX: ObjectSpec = ObjectSpec {
    name: "Regex",
    fields: &[
        field("expression", FieldType::String, true),
        field("group", FieldType::Integer, true),
        field("description", FieldType::String, true),
        field("references", FieldType::StringArray, true),
        field("validation", FieldType::Object("Validation"), true),
    ],
};

const VALIDATION: ObjectSpec = ObjectSpec {
    name: "Validation",
    fields: &[field("tests", FieldType::ObjectArray("Test"), true)],
};

const TEST: ObjectSpec = ObjectSpec {
    name: "Test",
    fields: &[
        field("input", FieldType::String, true),
        field("want", FieldType::StringArray, true),
    ],
};

static SCHEMA: SchemaDocument = SchemaDocument {
    root: "Template",
    objects: &[
        TEMPLATE,
        REQUIREMENTS,
        MATCH,
        OUTPUT,
        SCRIPT,
        REGEX,
        VALIDATION,
        TEST,
    ],
};

/// 返回模板的结构契约
pub fn describe() -> &'static SchemaDocument {
    &SCHEMA
}
