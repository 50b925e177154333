use pacemaker::api::{CibInfo, ClusterCapture, PropertyQuery, ResourceQuery, StatusInfo};
use pacemaker::cluster::{
    element_to_value, pcs_cluster_property_mapping, pcs_resources, pcs_resources_from_status, resources_from_cib,
};
use serde_json::json;

// Shapes taken from a two node SAP HANA scale-up cluster: cibadmin --query
// for the configuration, pcs status xml (crm_mon) for the live status.

const CIB_XML: &str = r#"<cib crm_feature_set="3.13.0" validate-with="pacemaker-3.8" epoch="43" admin_epoch="0">
  <configuration>
    <crm_config>
      <cluster_property_set id="cib-bootstrap-options">
        <nvpair id="cib-bootstrap-options-have-watchdog" name="have-watchdog" value="false"/>
        <nvpair id="cib-bootstrap-options-dc-version" name="dc-version" value="2.1.2-4.el8_6.5-ada5c3b36e2"/>
        <nvpair id="cib-bootstrap-options-cluster-infrastructure" name="cluster-infrastructure" value="corosync"/>
        <nvpair id="cib-bootstrap-options-cluster-name" name="cluster-name" value="hana_scale_up"/>
        <nvpair id="cib-bootstrap-options-stonith-timeout" name="stonith-timeout" value="900"/>
      </cluster_property_set>
    </crm_config>
    <nodes>
      <node id="1" uname="host1"/>
      <node id="2" uname="host2"/>
    </nodes>
    <resources>
      <primitive id="stonith-azure" class="stonith" type="fence_azure_arm">
        <operations>
          <op id="stonith-azure-monitor-3600" interval="3600" name="monitor"/>
        </operations>
      </primitive>
      <primitive id="vip_HAN_00" class="ocf" provider="heartbeat" type="IPaddr2">
        <instance_attributes id="vip_HAN_00-instance_attributes">
          <nvpair id="vip_HAN_00-instance_attributes-ip" name="ip" value="10.0.0.5"/>
        </instance_attributes>
      </primitive>
      <clone id="SAPHana_HAN_00-clone">
        <primitive id="SAPHana_HAN_00" class="ocf" provider="suse" type="SAPHana">
          <meta_attributes id="SAPHana_HAN_00-meta_attributes">
            <nvpair id="SAPHana_HAN_00-meta_attributes-target-role" name="target-role" value="Started"/>
          </meta_attributes>
        </primitive>
      </clone>
    </resources>
    <constraints>
      <rsc_colocation id="colocation-vip-SAPHana" rsc="vip_HAN_00" score="2000" with-rsc="SAPHana_HAN_00-clone"/>
    </constraints>
  </configuration>
  <status/>
</cib>"#;

const STATUS_XML: &str = r#"<crm_mon version="2.1.2">
  <summary>
    <stack type="corosync"/>
    <nodes_configured number="2"/>
    <resources_configured number="4" disabled="0" blocked="0"/>
  </summary>
  <nodes>
    <node name="host1" id="1" online="true" standby="false" maintenance="false" is_dc="true" resources_running="3"/>
    <node name="host2" id="2" online="true" standby="false" maintenance="false" is_dc="false" resources_running="1"/>
  </nodes>
  <resources>
    <resource id="stonith-azure" resource_agent="stonith:fence_azure_arm" role="Started" active="true" orphaned="false" blocked="false" managed="true" failed="false" failure_ignored="false" nodes_running_on="1"/>
    <resource id="vip_HAN_00" resource_agent="ocf::heartbeat:IPaddr2" role="Started" target_role="Started" active="true" orphaned="false" blocked="false" managed="true" failed="false" failure_ignored="false" nodes_running_on="1"/>
    <clone id="SAPHana_HAN_00-clone" multi_state="true" unique="false" managed="true" failed="false" failure_ignored="false">
      <resource id="SAPHana_HAN_00" resource_agent="ocf::suse:SAPHana" role="Master" active="true" orphaned="false" blocked="false" managed="true" failed="false" failure_ignored="false" nodes_running_on="1"/>
      <resource id="SAPHana_HAN_00" resource_agent="ocf::suse:SAPHana" role="Slave" active="false" orphaned="false" blocked="false" managed="true" failed="false" failure_ignored="false" nodes_running_on="1"/>
    </clone>
  </resources>
</crm_mon>"#;

fn cib_capture() -> ClusterCapture {
    let doc = roxmltree::Document::parse(CIB_XML).unwrap();
    ClusterCapture::Cib(CibInfo {
        pacemaker_cib: element_to_value(doc.root_element()),
        pacemaker_cib_xml: CIB_XML.to_string(),
    })
}

fn status_capture() -> ClusterCapture {
    let doc = roxmltree::Document::parse(STATUS_XML).unwrap();
    ClusterCapture::Status(StatusInfo {
        pacemaker_status: element_to_value(doc.root_element()),
        pacemaker_status_xml: STATUS_XML.to_string(),
    })
}

#[test]
fn test_cluster_property_mapping_end_to_end() {
    let mapping = pcs_cluster_property_mapping(&cib_capture(), &PropertyQuery::default());
    assert_eq!(mapping["cluster-name"], json!("hana_scale_up"));
    assert_eq!(mapping["cluster-infrastructure"], json!("corosync"));
    assert_eq!(mapping.len(), 5);

    let query = PropertyQuery { name_contains: Some("stonith".to_string()), ..Default::default() };
    let mapping = pcs_cluster_property_mapping(&cib_capture(), &query);
    assert_eq!(serde_json::Value::Object(mapping), json!({"stonith-timeout": "900"}));
}

#[test]
fn test_clone_nested_primitive_lookup_end_to_end() {
    let doc = roxmltree::Document::parse(CIB_XML).unwrap();
    let found = resources_from_cib(&doc, Some("SAPHana_HAN_00"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].attribute("class"), Some("ocf"));
    assert_eq!(found[0].attribute("provider"), Some("suse"));
    assert_eq!(found[0].attribute("type"), Some("SAPHana"));
}

#[test]
fn test_active_resources_from_status() {
    let query = ResourceQuery { active: Some(true), ..Default::default() };
    let found = pcs_resources_from_status(&status_capture(), &query);
    let ids: Vec<&str> = found
        .iter()
        .map(|r| r.as_object().unwrap().values().next().unwrap()["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["stonith-azure", "vip_HAN_00", "SAPHana_HAN_00"]);
}

#[test]
fn test_master_instance_of_clone() {
    let query = ResourceQuery {
        id: Some("SAPHana_HAN_00".to_string()),
        role: Some("Master".to_string()),
        ..Default::default()
    };
    let found = pcs_resources_from_status(&status_capture(), &query);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["resource"]["role"], json!("Master"));
    assert_eq!(found[0]["resource"]["resource_agent"], json!("ocf::suse:SAPHana"));
}

#[test]
fn test_cib_resource_filter_projects_nested_structure() {
    let query = ResourceQuery { resource_agent_type: Some("IPaddr2".to_string()), ..Default::default() };
    let found = pcs_resources(&cib_capture(), &query);
    assert_eq!(found.len(), 1);
    let primitive = &found[0]["primitive"];
    assert_eq!(primitive["id"], json!("vip_HAN_00"));
    // instance_attributes is a list tag carrying its own id attribute.
    assert_eq!(primitive["attrib"], json!({"id": "vip_HAN_00-instance_attributes"}));
    assert_eq!(
        primitive["instance_attributes"],
        json!([{"nvpair": {"id": "vip_HAN_00-instance_attributes-ip", "name": "ip", "value": "10.0.0.5"}}])
    );
}

#[test]
fn test_stonith_resources_have_no_provider() {
    let query = ResourceQuery { resource_agent_class: Some("stonith".to_string()), ..Default::default() };

    let from_cib = pcs_resources(&cib_capture(), &query);
    assert_eq!(from_cib.len(), 1);
    assert_eq!(from_cib[0]["primitive"]["id"], json!("stonith-azure"));

    let from_status = pcs_resources(&status_capture(), &query);
    assert_eq!(from_status.len(), 1);
    assert_eq!(from_status[0]["resource"]["id"], json!("stonith-azure"));
}

#[test]
fn test_normalized_status_lists_every_node() {
    let capture = status_capture();
    let status = match &capture {
        ClusterCapture::Status(info) => &info.pacemaker_status,
        ClusterCapture::Cib(_) => unreachable!(),
    };
    let nodes = status["crm_mon"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0]["node"]["name"], json!("host1"));
    assert_eq!(nodes[1]["node"]["name"], json!("host2"));
}

#[test]
fn test_mismatched_captures_yield_empty_results() {
    // A status capture has no cluster properties, a CIB capture no
    // status-only resources.
    assert!(pcs_cluster_property_mapping(&status_capture(), &PropertyQuery::default()).is_empty());
    assert!(pcs_resources_from_status(&cib_capture(), &ResourceQuery::default()).is_empty());
}
